//! Domain model for the user directory.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store and front-ends.
//!
//! # Invariants
//! - Every record is identified by an externally assigned `UserId`.
//! - Uniqueness of `id` and `email` is enforced by the repository layer,
//!   not by the record itself.

pub mod user;
