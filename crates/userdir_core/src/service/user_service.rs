//! User use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for front-end callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository uniqueness checks.
//! - The service layer remains storage-agnostic.

use crate::export::csv::{export_users, ExportOutcome, ExportResult};
use crate::model::user::{User, UserId};
use crate::repo::user_repo::{AddConflict, RepoResult, UserRepository};
use std::path::Path;

/// Use-case wrapper over a user repository.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a record built from caller-provided fields.
    ///
    /// Returns the repository conflict unchanged when the id or email is
    /// already taken; the store is untouched in that case.
    pub fn add_user(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), AddConflict> {
        self.repo.add(User::new(id, name, email))
    }

    /// Returns the current sequence in store order.
    pub fn users(&self) -> &[User] {
        self.repo.list()
    }

    /// Looks up one record by id.
    pub fn find_user(&self, id: UserId) -> RepoResult<&User> {
        self.repo.find_by_id(id)
    }

    /// Overwrites name and email of an existing record.
    pub fn update_user(&mut self, id: UserId, new_name: &str, new_email: &str) -> RepoResult<()> {
        self.repo.update(id, new_name, new_email)
    }

    /// Removes one record by id and returns it.
    pub fn delete_user(&mut self, id: UserId) -> RepoResult<User> {
        self.repo.delete(id)
    }

    /// Reorders the sequence by case-insensitive name.
    pub fn sort_users_by_name(&mut self) {
        self.repo.sort_by_name();
    }

    /// Reorders the sequence by ascending id.
    pub fn sort_users_by_id(&mut self) {
        self.repo.sort_by_id();
    }

    /// Exports the current sequence as CSV to `path`.
    pub fn export_csv(&self, path: &Path) -> ExportResult<ExportOutcome> {
        export_users(self.repo.list(), path)
    }
}
