//! Card for one user on the users page.

#[cfg(test)]
#[path = "user_card_test.rs"]
mod user_card_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::format::email_handle;

/// Header name for a user card; body rows fall back to `N/A` instead.
fn header_name(user: &User) -> String {
    user.name
        .clone()
        .unwrap_or_else(|| "Unknown User".to_owned())
}

/// Body-row text for an optional field.
fn field_or_na(value: Option<&str>) -> String {
    value.map_or_else(|| "N/A".to_owned(), ToOwned::to_owned)
}

/// User card with name, handle, team, points, and an edit button.
#[component]
pub fn UserCard(user: User, on_edit: Callback<User>) -> impl IntoView {
    let handle = email_handle(user.email.as_deref());
    let display_name = header_name(&user);
    let name = field_or_na(user.name.as_deref());
    let email = field_or_na(user.email.as_deref());
    let team = user.team.clone().unwrap_or_else(|| "No team".to_owned());
    let points = user.total_points.unwrap_or(0);

    view! {
        <div class="col-lg-4 col-md-6 mb-4">
            <div class="card h-100">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <div>
                        <h5 class="mb-0">{display_name}</h5>
                        <small class="text-white-50">{format!("@{handle}")}</small>
                    </div>
                    <button
                        class="btn btn-sm btn-light"
                        title="Edit user"
                        on:click=move |_| on_edit.run(user.clone())
                    >
                        "✏️"
                    </button>
                </div>
                <div class="card-body">
                    <ul class="list-group list-group-flush">
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"👤 Name:"</strong></span>
                            <span class="text-muted">{name}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"📧 Email:"</strong></span>
                            <span class="text-muted small">{email}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"👥 Team:"</strong></span>
                            <span class="badge bg-primary rounded-pill">{team}</span>
                        </li>
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span><strong>"⭐ Points:"</strong></span>
                            <span class="badge bg-success rounded-pill fs-6">{points}</span>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
