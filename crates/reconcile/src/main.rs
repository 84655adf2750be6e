//! Command-line entry point for the snapshot/dump reconciliation.
//!
//! Usage:
//!
//! ```text
//! armurerie-reconcile <weapons.json> <employees.json> <base_weapons.json> <backup.sql>
//! ```
//!
//! Prints the difference report on stdout. Exits 0 when both sides
//! match, 1 when differences were found, 2 on a usage or parse error.

use std::path::Path;
use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armurerie_reconcile::dump::Dump;
use armurerie_reconcile::report::reconcile;
use armurerie_reconcile::snapshot::Snapshot;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armurerie_reconcile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let [_, weapons_path, employees_path, base_weapons_path, sql_path] = args.as_slice() else {
        eprintln!(
            "usage: armurerie-reconcile <weapons.json> <employees.json> <base_weapons.json> <backup.sql>"
        );
        process::exit(2);
    };

    let snapshot = match Snapshot::load(
        Path::new(weapons_path),
        Path::new(employees_path),
        Path::new(base_weapons_path),
    ) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "failed to load JSON snapshots");
            process::exit(2);
        }
    };

    let sql_text = match std::fs::read_to_string(sql_path) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(path = %sql_path, error = %err, "failed to read SQL dump");
            process::exit(2);
        }
    };
    let dump = match Dump::parse(&sql_text) {
        Ok(dump) => dump,
        Err(err) => {
            tracing::error!(error = %err, "failed to parse SQL dump");
            process::exit(2);
        }
    };

    let report = reconcile(&snapshot, &dump);
    print!("{report}");

    if !report.is_clean() {
        process::exit(1);
    }
}
