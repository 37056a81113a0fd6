//! Wire types for the OctoFit REST API.
//!
//! DESIGN
//! ======
//! Records are lenient projections: every field the UI reads is optional
//! (or defaulted) so a partially populated record never fails the decode
//! of a whole collection. The backend is treated as the source of truth;
//! nothing here validates or normalizes beyond shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub team: Option<String>,
    pub total_points: Option<i64>,
}

/// A team competing on the leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub member_count: Option<i64>,
    pub total_points: Option<i64>,
}

/// A logged fitness activity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: Option<String>,
    pub activity_type: Option<String>,
    pub duration: Option<i64>,
    pub calories: Option<i64>,
    pub points: Option<i64>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

/// A curated workout plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<i64>,
    pub calories_per_session: Option<i64>,
    pub points_per_session: Option<i64>,
}

/// One ranked leaderboard row (`type` is `"user"` or `"team"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub rank: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub team: Option<String>,
    pub points: Option<i64>,
}

/// Body of `PATCH /api/users/{id}/` — exactly the three editable fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub team: String,
}

/// Top-level response shape for collection endpoints.
///
/// The backend returns either a bare array or a paginated wrapper with a
/// `results` field; every other shape is tolerated and resolves to an
/// empty collection rather than an error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// Paginated wrapper: `{"results": [...], ...}`.
    Paginated { results: Vec<T> },
    /// Bare array: `[...]`.
    Bare(Vec<T>),
    /// Anything else — normalized to no records.
    Other(serde_json::Value),
}

impl<T> Envelope<T> {
    /// Resolve the envelope to its record sequence.
    pub fn into_records(self) -> Vec<T> {
        match self {
            Envelope::Paginated { results } | Envelope::Bare(results) => results,
            Envelope::Other(_) => Vec::new(),
        }
    }
}
