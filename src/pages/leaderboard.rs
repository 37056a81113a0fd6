//! Leaderboard page: ranked table with medals for the top three.

use leptos::prelude::*;

use crate::components::resource_view::resource_view;
use crate::net::api;
use crate::net::types::LeaderboardEntry;
use crate::state::resource::{ResourceState, spawn_load};
use crate::util::format::{rank_badge, rank_row_class};

/// One ranked table row.
fn leaderboard_row(entry: &LeaderboardEntry) -> impl IntoView + use<> {
    let rank = entry.rank.unwrap_or(0);
    let row_class = rank_row_class(rank);
    let badge_class = if (1..=3).contains(&rank) {
        "badge bg-warning text-dark fs-6"
    } else {
        "badge bg-secondary"
    };
    let name = entry.name.clone().unwrap_or_default();
    let email = entry.email.clone().unwrap_or_default();
    let team = entry.team.clone().unwrap_or_default();
    let points = entry.points.unwrap_or(0);
    let kind = entry.entry_type.clone().unwrap_or_default();

    view! {
        <tr class=row_class>
            <td class="text-center">
                <span class=badge_class>{rank_badge(rank)}</span>
            </td>
            <td><strong>{name}</strong></td>
            <td class="text-muted">{email}</td>
            <td><span class="badge bg-primary">{team}</span></td>
            <td class="text-center"><span class="badge bg-success fs-6">{points}</span></td>
            <td class="text-center"><span class="badge bg-info text-dark">{kind}</span></td>
        </tr>
    }
}

/// Leaderboard page — competitors ranked by points.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let leaderboard = RwSignal::new(ResourceState::<LeaderboardEntry>::default());
    spawn_load(leaderboard, api::fetch_leaderboard);

    view! {
        <div class="container">
            <h2 class="mb-4">"🏆 Competitive Leaderboard"</h2>
            <p class="lead text-muted mb-4">
                "Top performers ranked by points - climb the ranks and become champion!"
            </p>
            {move || {
                leaderboard
                    .with(|state| {
                        resource_view(
                            state,
                            "Loading leaderboard...",
                            "No leaderboard entries yet. Start competing to see rankings!",
                            |records| {
                                let rows = records.iter().map(leaderboard_row).collect::<Vec<_>>();
                                let total = records.len();
                                view! {
                                    <div class="table-responsive">
                                        <table class="table table-hover align-middle">
                                            <thead>
                                                <tr>
                                                    <th scope="col" class="text-center">"🏅 Rank"</th>
                                                    <th scope="col">"👤 Name"</th>
                                                    <th scope="col">"📧 Email"</th>
                                                    <th scope="col">"👥 Team"</th>
                                                    <th scope="col" class="text-center">"⭐ Points"</th>
                                                    <th scope="col" class="text-center">"📊 Type"</th>
                                                </tr>
                                            </thead>
                                            <tbody>{rows}</tbody>
                                        </table>
                                    </div>
                                    <div class="text-center mt-4">
                                        <p class="text-muted">
                                            "Total Competitors: " <strong>{total}</strong>
                                        </p>
                                    </div>
                                }
                            },
                        )
                    })
            }}
        </div>
    }
}
