//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    activities::ActivitiesPage, home::HomePage, leaderboard::LeaderboardPage, teams::TeamsPage,
    users::UsersPage, workouts::WorkoutsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Sets up client-side routing; each page owns its own fetch state, so no
/// shared contexts are needed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/octofit-ui.css"/>
        <Title text="OctoFit Tracker"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("teams") view=TeamsPage/>
                <Route path=StaticSegment("activities") view=ActivitiesPage/>
                <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
            </Routes>
        </Router>
    }
}
