//! Card for one workout plan on the workouts page.

use leptos::prelude::*;

use crate::net::types::Workout;
use crate::util::format::difficulty_badge;

/// Workout card with difficulty badge and per-session stats.
#[component]
pub fn WorkoutCard(workout: Workout) -> impl IntoView {
    let name = workout.name.clone().unwrap_or_default();
    let description = workout.description.clone().unwrap_or_default();
    let category = workout.category.clone().unwrap_or_default();
    let difficulty = workout.difficulty.clone().unwrap_or_default();
    let badge_class = format!("badge bg-{}", difficulty_badge(&difficulty));
    let duration = workout.duration.unwrap_or(0);
    let calories = workout.calories_per_session.unwrap_or(0);
    let points = workout.points_per_session.unwrap_or(0);

    view! {
        <div class="col-lg-4 col-md-6 mb-4">
            <div class="card h-100">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{name}</h5>
                    <span class=badge_class>{difficulty}</span>
                </div>
                <div class="card-body">
                    <p class="card-text text-muted">{description}</p>
                    <hr/>
                    <ul class="list-group list-group-flush">
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"📂 Category:"</strong></span>
                            <span class="badge bg-info text-dark">{category}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"⏱️ Duration:"</strong></span>
                            <span class="badge bg-primary">{format!("{duration} min")}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"🔥 Calories:"</strong></span>
                            <span class="badge bg-warning text-dark">{calories}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"⭐ Points:"</strong></span>
                            <span class="badge bg-success">{points}</span>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
