//! REST API helpers for the OctoFit backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every collection
//! endpoint is decoded through [`Envelope`](super::types::Envelope) once,
//! so pages only ever see a plain record list.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP failures keep the status code, transport and decode failures keep
//! the underlying description. A response that is valid JSON but the wrong
//! shape is NOT an error — it resolves to an empty collection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Activity, LeaderboardEntry, Team, User, UserPatch, Workout};

/// Failure of a single API call. Terminal — callers never retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Transport failure or undecodable body.
    #[error("{0}")]
    Network(String),
}

/// Origin for a GitHub Codespaces port forward.
fn codespace_origin(name: &str) -> String {
    format!("https://{name}-8000.app.github.dev")
}

/// Build a full API URL for `path`.
///
/// When built inside a Codespace the backend is reached through its
/// forwarded port; otherwise paths stay relative to the current origin.
pub fn api_url(path: &str) -> String {
    match option_env!("CODESPACE_NAME") {
        Some(name) => codespace_origin(name) + path,
        None => path.to_owned(),
    }
}

/// GET a collection endpoint and normalize the response envelope.
async fn fetch_collection<T>(url: &str) -> Result<Vec<T>, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use super::types::Envelope;

        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let envelope: Envelope<T> = resp
            .json()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let records = envelope.into_records();
        log::debug!("GET {url} resolved {} records", records.len());
        Ok(records)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

/// Fetch all users from `/api/users/`.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure.
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    fetch_collection(&api_url("/api/users/")).await
}

/// Fetch all teams from `/api/teams/`.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure.
pub async fn fetch_teams() -> Result<Vec<Team>, FetchError> {
    fetch_collection(&api_url("/api/teams/")).await
}

/// Fetch all activities from `/api/activities/`.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure.
pub async fn fetch_activities() -> Result<Vec<Activity>, FetchError> {
    fetch_collection(&api_url("/api/activities/")).await
}

/// Fetch all workouts from `/api/workouts/`.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure.
pub async fn fetch_workouts() -> Result<Vec<Workout>, FetchError> {
    fetch_collection(&api_url("/api/workouts/")).await
}

/// Fetch the leaderboard from `/api/leaderboard/`.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure.
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, FetchError> {
    fetch_collection(&api_url("/api/leaderboard/")).await
}

/// PATCH the editable fields of one user and return the updated record.
///
/// # Errors
///
/// Returns a [`FetchError`] on HTTP or transport failure; no local state
/// is touched in that case.
pub async fn update_user(id: &str, patch: &UserPatch) -> Result<User, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/users/{id}/"));
        log::debug!("PATCH {url}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(patch)
            .map_err(|err| FetchError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<User>()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(FetchError::Network("not available on server".to_owned()))
    }
}
