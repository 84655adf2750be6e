//! Shared types and pure domain logic for the armurerie backend.
//!
//! Everything in this crate is database- and HTTP-free so the API server,
//! the importer and the reconciliation tool can all depend on it.

pub mod error;
pub mod pagination;
pub mod price;
pub mod types;
