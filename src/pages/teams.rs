//! Teams page listing team cards.

use leptos::prelude::*;

use crate::components::resource_view::resource_view;
use crate::components::team_card::TeamCard;
use crate::net::api;
use crate::net::types::Team;
use crate::state::resource::{ResourceState, spawn_load};

/// Teams page — one card per team.
#[component]
pub fn TeamsPage() -> impl IntoView {
    let teams = RwSignal::new(ResourceState::<Team>::default());
    spawn_load(teams, api::fetch_teams);

    view! {
        <div class="container">
            <h2 class="mb-4">"🏆 OctoFit Teams"</h2>
            <p class="lead text-muted mb-4">
                "Compete with your team and dominate the leaderboard"
            </p>
            {move || {
                teams
                    .with(|state| {
                        resource_view(
                            state,
                            "Loading teams...",
                            "No teams found. Create a team and start competing!",
                            |records| {
                                view! {
                                    <div class="row">
                                        {records
                                            .iter()
                                            .map(|team| view! { <TeamCard team=team.clone()/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            },
                        )
                    })
            }}
        </div>
    }
}
