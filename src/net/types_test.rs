use super::*;

// =============================================================
// Envelope shapes
// =============================================================

#[test]
fn envelope_bare_array() {
    let body = r#"[{"_id":"u1","name":"Ann"},{"_id":"u2","name":"Bob"}]"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();
    let records = envelope.into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "u1");
    assert_eq!(records[1].name.as_deref(), Some("Bob"));
}

#[test]
fn envelope_paginated_results() {
    let body = r#"{"count":2,"next":null,"previous":null,"results":[{"_id":"u1"},{"_id":"u2"}]}"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();
    let records = envelope.into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "u1");
}

#[test]
fn envelope_paginated_matches_bare() {
    let bare: Envelope<User> = serde_json::from_str(r#"[{"_id":"u1","name":"Ann"}]"#).unwrap();
    let wrapped: Envelope<User> =
        serde_json::from_str(r#"{"results":[{"_id":"u1","name":"Ann"}]}"#).unwrap();
    assert_eq!(bare.into_records(), wrapped.into_records());
}

#[test]
fn envelope_empty_array() {
    let envelope: Envelope<Team> = serde_json::from_str("[]").unwrap();
    assert!(envelope.into_records().is_empty());
}

#[test]
fn envelope_object_without_results_is_empty() {
    let envelope: Envelope<User> = serde_json::from_str(r#"{"detail":"not found"}"#).unwrap();
    assert!(envelope.into_records().is_empty());
}

#[test]
fn envelope_scalar_is_empty() {
    let envelope: Envelope<User> = serde_json::from_str("42").unwrap();
    assert!(envelope.into_records().is_empty());
}

#[test]
fn envelope_malformed_elements_are_empty_not_error() {
    // An array of non-records is coerced to no records, never a decode error.
    let envelope: Envelope<User> = serde_json::from_str("[1,2,3]").unwrap();
    assert!(envelope.into_records().is_empty());
}

// =============================================================
// Record leniency
// =============================================================

#[test]
fn user_missing_fields_default() {
    let user: User = serde_json::from_str(r#"{"_id":"u1"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.name.is_none());
    assert!(user.email.is_none());
    assert!(user.team.is_none());
    assert!(user.total_points.is_none());
}

#[test]
fn user_null_fields_default() {
    let user: User =
        serde_json::from_str(r#"{"_id":"u1","name":null,"team":null,"total_points":null}"#)
            .unwrap();
    assert!(user.name.is_none());
    assert!(user.team.is_none());
    assert!(user.total_points.is_none());
}

#[test]
fn user_without_id_defaults_to_empty() {
    let user: User = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
    assert_eq!(user.id, "");
}

#[test]
fn leaderboard_entry_type_field_renames() {
    let entry: LeaderboardEntry =
        serde_json::from_str(r#"{"_id":"l1","type":"user","rank":1,"points":120}"#).unwrap();
    assert_eq!(entry.entry_type.as_deref(), Some("user"));
    assert_eq!(entry.rank, Some(1));
    assert_eq!(entry.points, Some(120));
}

#[test]
fn activity_unknown_fields_are_ignored() {
    let activity: Activity = serde_json::from_str(
        r#"{"_id":"a1","activity_type":"Running","duration":30,"extra_field":true}"#,
    )
    .unwrap();
    assert_eq!(activity.activity_type.as_deref(), Some("Running"));
    assert_eq!(activity.duration, Some(30));
}

// =============================================================
// UserPatch body
// =============================================================

#[test]
fn user_patch_serializes_exactly_three_fields() {
    let patch = UserPatch {
        name: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        team: "Blue".to_owned(),
    };
    let body = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"name":"Ann","email":"a@x.com","team":"Blue"})
    );
}
