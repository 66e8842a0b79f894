//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and ordering APIs over the record sequence.
//! - Keep uniqueness checks inside the store boundary.
//!
//! # Invariants
//! - `add` rejects any record whose `id` or case-folded `email` is already
//!   present, leaving the sequence untouched.
//! - Lookup misses surface as `RepoError::NotFound`, never as defaults.
//! - Sorts are stable; ties keep their prior relative order.

use crate::model::user::{User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Lookup error for repository operations keyed by `UserId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(UserId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "User {id} not found"),
        }
    }
}

impl Error for RepoError {}

/// Rejection outcome for `add`; the store stays unchanged.
///
/// Kept separate from [`RepoError`] so signatures show that adding can
/// never miss a lookup and lookups can never conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddConflict {
    /// A record with this id is already stored.
    DuplicateId(UserId),
    /// A record with this email (ignoring case) is already stored.
    DuplicateEmail(String),
}

impl Display for AddConflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "User with ID {id} already exists!"),
            Self::DuplicateEmail(email) => {
                write!(f, "Email '{email}' is already registered!")
            }
        }
    }
}

impl Error for AddConflict {}

/// Store contract for user records.
pub trait UserRepository {
    /// Appends `user` to the end of the sequence unless its id or email is
    /// already taken.
    fn add(&mut self, user: User) -> Result<(), AddConflict>;

    /// Returns the full sequence in current order.
    fn list(&self) -> &[User];

    /// Linear-scan lookup; the single primitive reused by update and delete.
    fn find_by_id(&self, id: UserId) -> RepoResult<&User>;

    /// Overwrites name and email in place, preserving id and position.
    ///
    /// Email uniqueness is checked at add time only; an update may
    /// introduce a duplicate address.
    fn update(&mut self, id: UserId, new_name: &str, new_email: &str) -> RepoResult<()>;

    /// Removes and returns the record with `id`. Relative order of the
    /// remaining records is preserved.
    fn delete(&mut self, id: UserId) -> RepoResult<User>;

    /// Stable, case-insensitive lexicographic sort by name.
    fn sort_by_name(&mut self);

    /// Stable ascending sort by id.
    fn sort_by_id(&mut self);
}

/// Vec-backed store; insertion order is significant until a sort reorders it.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, id: UserId) -> RepoResult<usize> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&mut self, user: User) -> Result<(), AddConflict> {
        for existing in &self.users {
            if existing.id == user.id {
                return Err(AddConflict::DuplicateId(user.id));
            }
            if existing.email_matches(&user.email) {
                return Err(AddConflict::DuplicateEmail(user.email));
            }
        }

        self.users.push(user);
        Ok(())
    }

    fn list(&self) -> &[User] {
        &self.users
    }

    fn find_by_id(&self, id: UserId) -> RepoResult<&User> {
        let index = self.position_of(id)?;
        Ok(&self.users[index])
    }

    fn update(&mut self, id: UserId, new_name: &str, new_email: &str) -> RepoResult<()> {
        let index = self.position_of(id)?;
        let user = &mut self.users[index];
        user.name = new_name.to_string();
        user.email = new_email.to_string();
        Ok(())
    }

    fn delete(&mut self, id: UserId) -> RepoResult<User> {
        let index = self.position_of(id)?;
        Ok(self.users.remove(index))
    }

    fn sort_by_name(&mut self) {
        self.users.sort_by_key(User::name_sort_key);
    }

    fn sort_by_id(&mut self) {
        self.users.sort_by_key(|user| user.id);
    }
}
