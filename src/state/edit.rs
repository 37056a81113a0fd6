//! Edit workflow for user records.
//!
//! DESIGN
//! ======
//! The session is a small state machine: `Closed` -> `Editing` (draft
//! seeded from the selected record) -> `Saving` while the PATCH is in
//! flight, then back to `Closed` on success or `Editing` on failure with
//! the draft intact. The `Saving` state doubles as the duplicate-submit
//! gate: cancel and field edits are ignored until the save resolves.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::net::types::{User, UserPatch};

/// The three editable user fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Team,
}

/// Locally held, not-yet-submitted field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub team: String,
}

/// Lifecycle of one inline user edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    /// No active edit.
    #[default]
    Closed,
    /// Draft open for the selected record.
    Editing { user_id: String, draft: UserDraft },
    /// Submission in flight; further input is gated.
    Saving { user_id: String, draft: UserDraft },
}

impl EditSession {
    /// Open an edit for `user`, seeding the draft from its current values
    /// (empty string where a field is absent). Ignored while a save is in
    /// flight.
    pub fn begin(&mut self, user: &User) {
        if matches!(self, Self::Saving { .. }) {
            return;
        }
        *self = Self::Editing {
            user_id: user.id.clone(),
            draft: UserDraft {
                name: user.name.clone().unwrap_or_default(),
                email: user.email.clone().unwrap_or_default(),
                team: user.team.clone().unwrap_or_default(),
            },
        };
    }

    /// Replace one draft field. Legal only while `Editing`.
    pub fn update_field(&mut self, field: EditField, value: String) {
        if let Self::Editing { draft, .. } = self {
            match field {
                EditField::Name => draft.name = value,
                EditField::Email => draft.email = value,
                EditField::Team => draft.team = value,
            }
        }
    }

    /// Discard the draft. Ignored while `Saving` — the save must resolve
    /// first.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Editing { .. }) {
            *self = Self::Closed;
        }
    }

    /// Mark the submission in flight: `Editing` -> `Saving`.
    pub fn begin_save(&mut self) {
        if let Self::Editing { user_id, draft } = self {
            *self = Self::Saving {
                user_id: std::mem::take(user_id),
                draft: std::mem::take(draft),
            };
        }
    }

    /// The save resolved successfully; the session closes.
    pub fn save_succeeded(&mut self) {
        if matches!(self, Self::Saving { .. }) {
            *self = Self::Closed;
        }
    }

    /// The save failed; the draft and selection are preserved for retry.
    pub fn save_failed(&mut self) {
        if let Self::Saving { user_id, draft } = self {
            *self = Self::Editing {
                user_id: std::mem::take(user_id),
                draft: std::mem::take(draft),
            };
        }
    }

    /// Identifier of the record being edited, if a session is active.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Editing { user_id, .. } | Self::Saving { user_id, .. } => Some(user_id),
        }
    }

    /// The current draft, if a session is active.
    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Closed => None,
            Self::Editing { draft, .. } | Self::Saving { draft, .. } => Some(draft),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving { .. })
    }

    /// PATCH body for the active draft.
    pub fn patch(&self) -> Option<UserPatch> {
        self.draft().map(|draft| UserPatch {
            name: draft.name.clone(),
            email: draft.email.clone(),
            team: draft.team.clone(),
        })
    }
}

/// Replace the entry matching `updated` by identifier, preserving the
/// position and content of every other entry. No match, no change.
pub fn apply_update(records: &mut [User], updated: &User) {
    for record in records.iter_mut() {
        if record.id == updated.id {
            *record = updated.clone();
        }
    }
}
