//! User domain record.
//!
//! # Responsibility
//! - Define the canonical user record stored by the directory.
//! - Provide the case-insensitive email comparison backing the
//!   uniqueness invariant.
//!
//! # Invariants
//! - `id` is externally assigned and never changed by store operations.
//! - `email` is stored verbatim; only comparisons fold case.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = u32;

/// One user entry in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Externally assigned identifier, unique within a store.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address, unique within a store under case folding.
    pub email: String,
}

impl User {
    /// Creates a record from caller-provided fields.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns whether `candidate` equals this record's email ignoring case.
    pub fn email_matches(&self, candidate: &str) -> bool {
        self.email.to_lowercase() == candidate.to_lowercase()
    }

    /// Case-folded name used for lexicographic ordering.
    pub(crate) fn name_sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
