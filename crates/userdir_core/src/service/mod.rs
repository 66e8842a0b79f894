//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep front-end layers decoupled from storage details.

pub mod user_service;
