//! Workouts page listing curated workout plans.

use leptos::prelude::*;

use crate::components::resource_view::resource_view;
use crate::components::workout_card::WorkoutCard;
use crate::net::api;
use crate::net::types::Workout;
use crate::state::resource::{ResourceState, spawn_load};

/// Workouts page — one card per plan.
#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let workouts = RwSignal::new(ResourceState::<Workout>::default());
    spawn_load(workouts, api::fetch_workouts);

    view! {
        <div class="container">
            <h2 class="mb-4">"💪 Personalized Workouts"</h2>
            <p class="lead text-muted mb-4">
                "Choose from our curated workout plans tailored to your fitness goals"
            </p>
            {move || {
                workouts
                    .with(|state| {
                        resource_view(
                            state,
                            "Loading workouts...",
                            "No workouts available. Check back soon for new workout plans!",
                            |records| {
                                view! {
                                    <div class="row">
                                        {records
                                            .iter()
                                            .map(|workout| {
                                                view! { <WorkoutCard workout=workout.clone()/> }
                                            })
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
