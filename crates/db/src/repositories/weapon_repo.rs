//! Repository for the `weapons` table.

use armurerie_core::error::CoreError;
use armurerie_core::pagination::{clamp_limit, clamp_offset};
use armurerie_core::types::DbId;
use sqlx::PgPool;

use crate::models::weapon::{CreateWeapon, Weapon};
use crate::repositories::EmployeeRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, horodateur, employe_id, detenteur, nom_arme, serigraphie, prix";

/// Provides CRUD operations for registered weapons plus bulk reassignment.
pub struct WeaponRepo;

impl WeaponRepo {
    /// Find a weapon by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE id = $1");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List weapons in insertion order (id ascending), paginated.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Weapon>, sqlx::Error> {
        let limit = clamp_limit(limit, 100, 1000);
        let offset = clamp_offset(offset);
        let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All weapons currently assigned to one employee, in storage order.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE employe_id = $1");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Number of weapons assigned to one employee.
    pub async fn count_for_employee(pool: &PgPool, employee_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM weapons WHERE employe_id = $1")
            .bind(employee_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new weapon, returning the created row.
    ///
    /// The referenced employee is validated eagerly: a dangling
    /// `employe_id` fails with [`CoreError::NotFound`] before the insert
    /// is attempted (the FK constraint remains the backstop).
    pub async fn create(pool: &PgPool, input: &CreateWeapon) -> Result<Weapon, CoreError> {
        Self::ensure_employee_exists(pool, input.employe_id).await?;

        let query = format!(
            "INSERT INTO weapons (horodateur, employe_id, detenteur, nom_arme, serigraphie, prix)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(input.horodateur)
            .bind(input.employe_id)
            .bind(&input.detenteur)
            .bind(&input.nom_arme)
            .bind(&input.serigraphie)
            .bind(input.prix)
            .fetch_one(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))
    }

    /// Full-replace update of all weapon fields.
    pub async fn update(pool: &PgPool, id: DbId, input: &CreateWeapon) -> Result<Weapon, CoreError> {
        Self::ensure_employee_exists(pool, input.employe_id).await?;

        let query = format!(
            "UPDATE weapons SET
                horodateur = $2,
                employe_id = $3,
                detenteur = $4,
                nom_arme = $5,
                serigraphie = $6,
                prix = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .bind(input.horodateur)
            .bind(input.employe_id)
            .bind(&input.detenteur)
            .bind(&input.nom_arme)
            .bind(&input.serigraphie)
            .bind(input.prix)
            .fetch_optional(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Weapon",
                id,
            })
    }

    /// Delete a weapon, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Weapon, CoreError> {
        let query = format!("DELETE FROM weapons WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Weapon",
                id,
            })
    }

    /// Reassign every weapon owned by `from_id` to `to_id`.
    ///
    /// Both employees must exist. Returns the number of rows moved; the
    /// single UPDATE makes the transfer all-or-nothing.
    pub async fn reassign(pool: &PgPool, from_id: DbId, to_id: DbId) -> Result<u64, CoreError> {
        Self::ensure_employee_exists(pool, from_id).await?;
        Self::ensure_employee_exists(pool, to_id).await?;

        let result = sqlx::query("UPDATE weapons SET employe_id = $2 WHERE employe_id = $1")
            .bind(from_id)
            .bind(to_id)
            .execute(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        tracing::debug!(from_id, to_id, moved = result.rows_affected(), "weapons reassigned");

        Ok(result.rows_affected())
    }

    async fn ensure_employee_exists(pool: &PgPool, employee_id: DbId) -> Result<(), CoreError> {
        EmployeeRepo::find_by_id(pool, employee_id)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id: employee_id,
            })?;
        Ok(())
    }
}
