//! Offline reconciliation between JSON snapshots and a SQL dump.
//!
//! Loads the three entity snapshots (weapons, employees, base weapons)
//! exported as JSON arrays, parses the matching `COPY` blocks out of a
//! `pg_dump` plain-text backup, and reports per-table differences by id.
//! The report is meant for a human reading it; nothing here touches the
//! database.

pub mod dump;
pub mod record;
pub mod report;
pub mod snapshot;
