//! Activities page: a table of logged activities.

use leptos::prelude::*;

use crate::components::resource_view::resource_view;
use crate::net::api;
use crate::net::types::Activity;
use crate::state::resource::{ResourceState, spawn_load};
use crate::util::format::format_date;

/// One table row per activity.
fn activity_row(activity: &Activity) -> impl IntoView + use<> {
    let user = activity.user_email.clone().unwrap_or_default();
    let kind = activity.activity_type.clone().unwrap_or_default();
    let duration = activity.duration.unwrap_or(0);
    let calories = activity.calories.unwrap_or(0);
    let points = activity.points.unwrap_or(0);
    let date = activity.date.as_deref().map(format_date).unwrap_or_default();

    view! {
        <tr>
            <td><strong>{user}</strong></td>
            <td><span class="badge bg-primary">{kind}</span></td>
            <td class="text-center"><span class="badge bg-info text-dark">{duration}</span></td>
            <td class="text-center"><span class="badge bg-warning text-dark">{calories}</span></td>
            <td class="text-center"><span class="badge bg-success">{points}</span></td>
            <td class="text-muted">{date}</td>
        </tr>
    }
}

/// Activities page — tabular list with a total count footer.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = RwSignal::new(ResourceState::<Activity>::default());
    spawn_load(activities, api::fetch_activities);

    view! {
        <div class="container">
            <h2 class="mb-4">"🔥 Recent Activities"</h2>
            <p class="lead text-muted mb-4">
                "Track all fitness activities across the platform"
            </p>
            {move || {
                activities
                    .with(|state| {
                        resource_view(
                            state,
                            "Loading activities...",
                            "No activities recorded yet. Start your first workout!",
                            |records| {
                                let rows = records.iter().map(activity_row).collect::<Vec<_>>();
                                let total = records.len();
                                view! {
                                    <div class="table-responsive">
                                        <table class="table table-hover align-middle">
                                            <thead>
                                                <tr>
                                                    <th scope="col">"👤 User"</th>
                                                    <th scope="col">"🏃 Activity Type"</th>
                                                    <th scope="col" class="text-center">"⏱️ Duration (min)"</th>
                                                    <th scope="col" class="text-center">"🔥 Calories"</th>
                                                    <th scope="col" class="text-center">"⭐ Points"</th>
                                                    <th scope="col">"📅 Date"</th>
                                                </tr>
                                            </thead>
                                            <tbody>{rows}</tbody>
                                        </table>
                                    </div>
                                    <div class="text-center mt-4">
                                        <p class="text-muted">
                                            "Total Activities: " <strong>{total}</strong>
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
