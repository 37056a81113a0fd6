//! Users page: user cards plus the inline edit workflow.

use leptos::prelude::*;

use crate::components::edit_user_dialog::EditUserDialog;
use crate::components::resource_view::resource_view;
use crate::components::user_card::UserCard;
use crate::net::api;
use crate::net::types::{Team, User};
use crate::state::edit::EditSession;
use crate::state::resource::{ResourceState, spawn_load};

/// Users page — fetches the user list on mount, renders one card per
/// user, and hosts the edit dialog.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(ResourceState::<User>::default());
    let teams = RwSignal::new(ResourceState::<Team>::default());
    let session = RwSignal::new(EditSession::default());

    spawn_load(users, api::fetch_users);
    // Secondary, independent fetch feeding the edit dialog's team
    // selector. Its failure never touches the primary view state.
    spawn_load(teams, api::fetch_teams);

    Effect::new(move || {
        if let Some(message) = teams.with(|state| state.error().map(ToOwned::to_owned)) {
            log::error!("error fetching teams: {message}");
        }
    });

    let on_edit = Callback::new(move |user: User| session.update(|s| s.begin(&user)));

    view! {
        <div class="container">
            <h2 class="mb-4">"🏃 OctoFit Users"</h2>
            <p class="lead text-muted mb-4">
                "Track all registered users and their fitness progress"
            </p>
            {move || {
                users
                    .with(|state| {
                        resource_view(
                            state,
                            "Loading users...",
                            "No users found. Start your fitness journey today!",
                            |records| {
                                view! {
                                    <div class="row">
                                        {records
                                            .iter()
                                            .map(|user| {
                                                view! { <UserCard user=user.clone() on_edit=on_edit/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            },
                        )
                    })
            }}
            <Show when=move || session.with(EditSession::is_open)>
                <EditUserDialog session=session users=users teams=teams/>
            </Show>
        </div>
    }
}
