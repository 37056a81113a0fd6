//! Top navigation bar linking the six routes.

use leptos::prelude::*;

/// One nav entry.
fn nav_item(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <a class="nav-link" href=href>
                {label}
            </a>
        </li>
    }
}

/// Dark navbar shown above every page.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <a class="navbar-brand" href="/">
                    "OctoFit Tracker"
                </a>
                <div class="collapse navbar-collapse show" id="navbarNav">
                    <ul class="navbar-nav ms-auto">
                        {nav_item("/", "🏠 Home")}
                        {nav_item("/users", "👥 Users")}
                        {nav_item("/teams", "🏆 Teams")}
                        {nav_item("/activities", "🔥 Activities")}
                        {nav_item("/workouts", "💪 Workouts")}
                        {nav_item("/leaderboard", "🏅 Leaderboard")}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
