//! Shared rendering of the fetch lifecycle.
//!
//! Every list page goes through [`resource_view`], so the
//! loading/error/empty/loaded contract is written exactly once.

use leptos::prelude::*;

use crate::state::resource::ResourceState;

/// Spinner notice shown while a fetch is in flight.
#[component]
pub fn LoadingNotice(label: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert-info d-flex align-items-center" role="alert">
            <div class="spinner-border text-info me-3" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <strong>{label}</strong>
        </div>
    }
}

/// Error panel shown when a fetch fails. No data is rendered alongside it.
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-danger" role="alert">
            <h4 class="alert-heading">"Error!"</h4>
            <p>{message}</p>
        </div>
    }
}

/// Notice appended below an empty data container.
#[component]
pub fn EmptyNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert-warning text-center" role="alert">
            {message}
        </div>
    }
}

/// Map one lifecycle state to its view.
///
/// `render` receives the loaded records — including an empty list, so the
/// page still shows its data container (with zero rows) plus the
/// empty-state notice underneath, matching the loaded layout.
pub fn resource_view<T, V>(
    state: &ResourceState<T>,
    loading_label: &'static str,
    empty_notice: &'static str,
    render: impl FnOnce(&[T]) -> V,
) -> AnyView
where
    V: IntoView + 'static,
{
    match state {
        ResourceState::Loading => view! { <LoadingNotice label=loading_label/> }.into_any(),
        ResourceState::Failed(message) => {
            view! { <ErrorPanel message=message.clone()/> }.into_any()
        }
        ResourceState::Loaded(records) => {
            let notice = records
                .is_empty()
                .then(|| view! { <EmptyNotice message=empty_notice/> });
            let body = render(records).into_any();
            view! {
                {body}
                {notice}
            }
            .into_any()
        }
    }
}
