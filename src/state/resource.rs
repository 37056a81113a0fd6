//! Generic fetch-on-mount lifecycle shared by every list view.
//!
//! DESIGN
//! ======
//! Each page owns an `RwSignal<ResourceState<T>>` that starts `Loading`,
//! fires exactly one fetch when the component mounts, and lands on
//! `Loaded` or `Failed`. Transitions are one-directional per attempt and
//! only a fresh mount starts a new one. Keeping the union pure (no view
//! code, no network code) is what lets the whole lifecycle be unit tested
//! natively.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::FetchError;

/// Lifecycle of one fetched collection.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceState<T> {
    /// Request in flight (initial state).
    Loading,
    /// Request succeeded; holds the normalized record list.
    Loaded(Vec<T>),
    /// Request failed; holds the human-readable message.
    Failed(String),
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ResourceState<T> {
    /// Resolve a finished fetch into its terminal state.
    pub fn from_result(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(records) => Self::Loaded(records),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded records, if any.
    pub fn records(&self) -> Option<&[T]> {
        match self {
            Self::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Mutable access to the loaded records, for in-place reconciliation
    /// after a successful save.
    pub fn records_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            Self::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fire `fetch` once and store its outcome in `state`.
///
/// Browser-only; on the server the signal simply stays `Loading`. The
/// request is never retried or cancelled — a view abandoned mid-flight
/// may see one late state update, which is accepted.
pub fn spawn_load<T, Fut>(state: RwSignal<ResourceState<T>>, fetch: impl FnOnce() -> Fut + 'static)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        state.set(ResourceState::from_result(fetch().await));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, fetch);
    }
}
