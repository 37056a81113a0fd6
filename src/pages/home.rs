//! Landing page with links into the data views. Pure presentation.

use leptos::prelude::*;

/// A clickable card linking to one of the data views.
fn nav_card(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-md-4 mb-4">
            <a href=href class="text-decoration-none">
                <div class="card clickable-card">
                    <div class="card-body">
                        <div class="fs-1 mb-3">{icon}</div>
                        <h5 class="card-title">{title}</h5>
                        <p class="card-text text-muted">{blurb}</p>
                    </div>
                </div>
            </a>
        </div>
    }
}

/// Home page — hero banner plus navigation cards.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="jumbotron p-5">
                <h1 class="display-3 fw-bold">"Welcome to OctoFit Tracker! 🏃"</h1>
                <p class="lead fs-4">
                    "Track your fitness journey, compete with your team, and achieve your health goals!"
                </p>
                <div class="mt-4">
                    <a href="/workouts" class="btn btn-light btn-lg me-3">
                        "💪 Start Workout"
                    </a>
                    <a href="/leaderboard" class="btn btn-outline-light btn-lg">
                        "🏆 View Rankings"
                    </a>
                </div>
            </div>

            <div class="row mt-5 text-center">
                {nav_card("/users", "👥", "User Profiles", "Track individual progress and achievements")}
                {nav_card("/teams", "🏆", "Team Competition", "Join forces and compete for glory")}
                {nav_card("/activities", "🔥", "Activity Tracking", "Log and monitor every workout")}
            </div>
            <div class="row mt-3 text-center">
                {nav_card("/leaderboard", "🏅", "Leaderboard Rankings", "See who's leading the competition")}
            </div>
        </div>
    }
}
