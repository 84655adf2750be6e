//! One-shot CSV import for the armurerie registry.
//!
//! Reads the exported registry spreadsheet and loads it into the
//! database: employees are created lazily on first sight of their name,
//! weapons are inserted referencing them.

pub mod csv;
pub mod run;
