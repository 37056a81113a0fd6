//! Card for one team on the teams page.

use leptos::prelude::*;

use crate::net::types::Team;

/// Team card with description, member count, and total points.
#[component]
pub fn TeamCard(team: Team) -> impl IntoView {
    let name = team.name.clone().unwrap_or_default();
    let description = team.description.clone().unwrap_or_default();
    let members = team.member_count.unwrap_or(0);
    let points = team.total_points.unwrap_or(0);

    view! {
        <div class="col-lg-6 mb-4">
            <div class="card h-100">
                <div class="card-header">
                    <h5 class="mb-0">{name}</h5>
                </div>
                <div class="card-body">
                    <p class="card-text text-muted">{description}</p>
                    <hr/>
                    <div class="d-flex justify-content-around mt-3">
                        <div class="text-center">
                            <h3 class="text-primary mb-0">{members}</h3>
                            <small class="text-muted">"👥 Members"</small>
                        </div>
                        <div class="text-center">
                            <h3 class="text-success mb-0">{points}</h3>
                            <small class="text-muted">"⭐ Total Points"</small>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
