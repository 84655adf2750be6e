//! The import pass itself.

use std::collections::HashMap;

use armurerie_core::error::CoreError;
use armurerie_core::price::parse_price_cents;
use armurerie_core::types::{DbId, Timestamp};
use chrono::NaiveDateTime;
use sqlx::PgPool;

use armurerie_db::models::employee::{CreateEmployee, Role};
use armurerie_db::repositories::EmployeeRepo;

use crate::csv::{self, CsvTable};

/// Timestamp format used by the registry export ("17/05/2023 12:30:00").
const HORODATEUR_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Counters reported at the end of a run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub employees_created: usize,
    pub weapons_inserted: usize,
}

/// Import a registry CSV export into the database.
///
/// Employees are created (and committed) as soon as their name first
/// appears, so a later failure leaves them in place. Weapon inserts all
/// run inside one transaction committed at the end of the pass; any
/// error rolls that transaction back and aborts the run.
pub async fn import_csv(pool: &PgPool, csv_text: &str) -> Result<ImportSummary, CoreError> {
    let table = csv::parse(csv_text)?;
    let columns = RegistryColumns::locate(&table)?;

    let mut summary = ImportSummary::default();
    let mut employees: HashMap<String, DbId> = HashMap::new();

    let mut tx = pool
        .begin()
        .await
        .map_err(|err| CoreError::Internal(err.to_string()))?;

    for (i, row) in table.rows().iter().enumerate() {
        let line = i + 2; // 1-based, after the header row

        let employee_name = row[columns.employee_name].trim();
        if employee_name.is_empty() {
            return Err(CoreError::Validation(format!(
                "CSV row {line}: empty employee name"
            )));
        }

        let employee_id = match employees.get(employee_name) {
            Some(&id) => id,
            None => {
                let id = find_or_create_employee(pool, employee_name, &mut summary).await?;
                employees.insert(employee_name.to_string(), id);
                id
            }
        };

        let horodateur = parse_horodateur(&row[columns.horodateur])
            .map_err(|err| CoreError::Validation(format!("CSV row {line}: {err}")))?;
        let prix = parse_price_cents(&row[columns.prix])
            .map_err(|err| CoreError::Validation(format!("CSV row {line}: {err}")))?;

        sqlx::query(
            "INSERT INTO weapons (horodateur, employe_id, detenteur, nom_arme, serigraphie, prix)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(horodateur)
        .bind(employee_id)
        .bind(&row[columns.detenteur])
        .bind(&row[columns.nom_arme])
        .bind(&row[columns.serigraphie])
        .bind(prix)
        .execute(&mut *tx)
        .await
        .map_err(|err| CoreError::Internal(err.to_string()))?;

        summary.weapons_inserted += 1;
    }

    tx.commit()
        .await
        .map_err(|err| CoreError::Internal(err.to_string()))?;

    Ok(summary)
}

/// Column indices of the six required registry columns.
struct RegistryColumns {
    horodateur: usize,
    employee_name: usize,
    detenteur: usize,
    nom_arme: usize,
    serigraphie: usize,
    prix: usize,
}

impl RegistryColumns {
    fn locate(table: &CsvTable) -> Result<Self, CoreError> {
        Ok(Self {
            horodateur: table.require_column("Horodateur")?,
            employee_name: table.require_column("Nom de l'employé")?,
            detenteur: table.require_column("Nom du Détenteur")?,
            nom_arme: table.require_column("Nom de l'arme")?,
            serigraphie: table.require_column("Sérigraphie")?,
            prix: table.require_column("Prix")?,
        })
    }
}

/// Resolve an employee id by exact name, creating the row on first
/// sight. Names containing "patron" (case-insensitive) are registered
/// as patrons.
async fn find_or_create_employee(
    pool: &PgPool,
    name: &str,
    summary: &mut ImportSummary,
) -> Result<DbId, CoreError> {
    if let Some(existing) = EmployeeRepo::find_by_name(pool, name)
        .await
        .map_err(|err| CoreError::Internal(err.to_string()))?
    {
        return Ok(existing.id);
    }

    let role = if name.to_lowercase().contains("patron") {
        Role::Patron
    } else {
        Role::Employee
    };

    let created = EmployeeRepo::create(
        pool,
        &CreateEmployee {
            name: name.to_string(),
            color: None,
            role,
        },
    )
    .await?;

    tracing::info!(name, role = ?role, "created employee");
    summary.employees_created += 1;
    Ok(created.id)
}

fn parse_horodateur(raw: &str) -> Result<Timestamp, CoreError> {
    NaiveDateTime::parse_from_str(raw.trim(), HORODATEUR_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::Validation(format!("invalid timestamp: '{raw}'")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
