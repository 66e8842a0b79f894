//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the store contract consumed by the service layer.
//! - Enforce record uniqueness invariants on the write path.
//!
//! # Invariants
//! - No two stored records share an `id`.
//! - No two stored records share an `email` under case-insensitive
//!   comparison; the check runs at add time (see `UserRepository::update`).

pub mod user_repo;
