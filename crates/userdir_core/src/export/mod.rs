//! On-demand export of the record sequence.
//!
//! # Responsibility
//! - Serialize current store contents to external files.
//! - Keep file-format details out of the repository layer.

pub mod csv;
