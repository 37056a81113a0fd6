use super::*;

use crate::net::types::User;

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: Some(name.to_owned()),
        ..User::default()
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn initial_state_is_loading() {
    let state = ResourceState::<User>::default();
    assert!(state.is_loading());
    assert!(state.records().is_none());
    assert!(state.error().is_none());
}

#[test]
fn successful_fetch_loads_records() {
    let records = vec![user("u1", "Ann"), user("u2", "Bob")];
    let state = ResourceState::from_result(Ok(records.clone()));
    assert!(!state.is_loading());
    assert_eq!(state.records(), Some(records.as_slice()));
}

#[test]
fn empty_fetch_is_loaded_not_failed() {
    let state = ResourceState::<User>::from_result(Ok(Vec::new()));
    assert_eq!(state.records(), Some(&[] as &[User]));
    assert!(state.error().is_none());
}

#[test]
fn http_failure_keeps_status_message() {
    let state = ResourceState::<User>::from_result(Err(FetchError::Status(503)));
    assert_eq!(state.error(), Some("HTTP error! status: 503"));
    assert!(state.records().is_none());
}

#[test]
fn network_failure_keeps_description() {
    let state =
        ResourceState::<User>::from_result(Err(FetchError::Network("timed out".to_owned())));
    assert_eq!(state.error(), Some("timed out"));
}

// =============================================================
// Reconciliation access
// =============================================================

#[test]
fn records_mut_only_while_loaded() {
    let mut state = ResourceState::from_result(Ok(vec![user("u1", "Ann")]));
    state.records_mut().unwrap().push(user("u2", "Bob"));
    assert_eq!(state.records().unwrap().len(), 2);

    let mut loading = ResourceState::<User>::Loading;
    assert!(loading.records_mut().is_none());
}

// =============================================================
// Idempotence: same backend data, same state
// =============================================================

#[test]
fn refetching_identical_data_yields_identical_state() {
    let records = vec![user("u1", "Ann"), user("u2", "Bob")];
    let first = ResourceState::from_result(Ok(records.clone()));
    let second = ResourceState::from_result(Ok(records));
    assert_eq!(first, second);
}
