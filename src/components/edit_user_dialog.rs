//! Modal dialog for editing one user record.
//!
//! The dialog is a thin view over [`EditSession`]: inputs mutate the
//! draft, Save drives the PATCH and reconciles the loaded user list on
//! success, and a failed save keeps the draft open behind a blocking
//! alert. Cancel and Save are disabled while a submission is in flight.

use leptos::prelude::*;

use crate::net::types::{Team, User};
use crate::state::edit::{EditField, EditSession};
use crate::state::resource::ResourceState;

/// Edit dialog bound to the users page state.
#[component]
pub fn EditUserDialog(
    session: RwSignal<EditSession>,
    users: RwSignal<ResourceState<User>>,
    teams: RwSignal<ResourceState<Team>>,
) -> impl IntoView {
    let saving = move || session.with(EditSession::is_saving);

    let name_value =
        move || session.with(|s| s.draft().map(|d| d.name.clone()).unwrap_or_default());
    let email_value =
        move || session.with(|s| s.draft().map(|d| d.email.clone()).unwrap_or_default());
    let team_value =
        move || session.with(|s| s.draft().map(|d| d.team.clone()).unwrap_or_default());

    // Candidate teams from the independent secondary fetch; empty while
    // that fetch is pending or failed, leaving only the placeholder.
    let team_names = move || {
        teams.with(|state| {
            state
                .records()
                .map(|records| {
                    records
                        .iter()
                        .filter_map(|team| team.name.clone())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let on_cancel = move |_| session.update(EditSession::cancel);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with(EditSession::is_saving) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = session.with(|s| s.user_id().map(ToOwned::to_owned)) else {
                return;
            };
            let Some(patch) = session.with(EditSession::patch) else {
                return;
            };
            session.update(EditSession::begin_save);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(&id, &patch).await {
                    Ok(updated) => {
                        users.update(|state| {
                            if let Some(records) = state.records_mut() {
                                crate::state::edit::apply_update(records, &updated);
                            }
                        });
                        session.update(EditSession::save_succeeded);
                    }
                    Err(err) => {
                        log::error!("error updating user {id}: {err}");
                        session.update(EditSession::save_failed);
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .alert_with_message("Failed to update user. Please try again.");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = users;
        }
    };

    view! {
        <div class="modal show d-block" tabindex="-1" style="background-color: rgba(0,0,0,0.5)">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">"✏️ Edit User Details"</h5>
                        <button type="button" class="btn-close" on:click=on_cancel></button>
                    </div>
                    <form on:submit=on_submit>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="edit-user-name">
                                    <strong>"👤 Name"</strong>
                                </label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="edit-user-name"
                                    required
                                    prop:value=name_value
                                    on:input=move |ev| {
                                        session
                                            .update(|s| {
                                                s.update_field(EditField::Name, event_target_value(&ev));
                                            });
                                    }
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="edit-user-email">
                                    <strong>"📧 Email"</strong>
                                </label>
                                <input
                                    type="email"
                                    class="form-control"
                                    id="edit-user-email"
                                    required
                                    prop:value=email_value
                                    on:input=move |ev| {
                                        session
                                            .update(|s| {
                                                s.update_field(EditField::Email, event_target_value(&ev));
                                            });
                                    }
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="edit-user-team">
                                    <strong>"👥 Team"</strong>
                                </label>
                                <select
                                    class="form-select"
                                    id="edit-user-team"
                                    required
                                    on:change=move |ev| {
                                        session
                                            .update(|s| {
                                                s.update_field(EditField::Team, event_target_value(&ev));
                                            });
                                    }
                                >
                                    <option value="" selected=move || team_value().is_empty()>
                                        "Select a team..."
                                    </option>
                                    {move || {
                                        let current = team_value();
                                        team_names()
                                            .into_iter()
                                            .map(|name| {
                                                let selected = name == current;
                                                let label = name.clone();
                                                view! {
                                                    <option value=name selected=selected>
                                                        {label}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=on_cancel
                                disabled=saving
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=saving>
                                {move || if saving() { "Saving..." } else { "💾 Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
