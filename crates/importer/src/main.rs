//! Command-line entry point for the registry CSV import.
//!
//! Reads the whole CSV into memory, connects to the database pointed at
//! by `DATABASE_URL`, runs migrations, then performs the import pass.

use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armurerie_importer::run::import_csv;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armurerie_importer=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::error!("DATABASE_URL must be set");
            process::exit(1);
        }
    };
    let csv_path = match std::env::var("CSV_PATH") {
        Ok(path) => path,
        Err(_) => {
            tracing::error!("CSV_PATH must be set");
            process::exit(1);
        }
    };

    let csv_text = match std::fs::read_to_string(&csv_path) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(path = %csv_path, error = %err, "failed to read CSV file");
            process::exit(1);
        }
    };

    let pool = match armurerie_db::create_pool(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to database");
            process::exit(1);
        }
    };

    if let Err(err) = armurerie_db::run_migrations(&pool).await {
        tracing::error!(error = %err, "failed to run migrations");
        process::exit(1);
    }

    tracing::info!(path = %csv_path, "starting import");
    match import_csv(&pool, &csv_text).await {
        Ok(summary) => {
            tracing::info!(
                employees_created = summary.employees_created,
                weapons_inserted = summary.weapons_inserted,
                "import complete"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "import failed, weapon inserts rolled back");
            process::exit(1);
        }
    }
}
