//! Core domain logic for the user directory.
//! This crate is the single source of truth for business invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use export::csv::{export_users, ExportError, ExportOutcome, ExportResult, CSV_HEADER};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId};
pub use repo::user_repo::{
    AddConflict, InMemoryUserRepository, RepoError, RepoResult, UserRepository,
};
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
