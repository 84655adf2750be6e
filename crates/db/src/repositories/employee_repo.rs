//! Repository for the `employees` table.

use armurerie_core::error::CoreError;
use armurerie_core::pagination::{clamp_limit, clamp_offset};
use armurerie_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee};
use crate::repositories::is_unique_violation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, role";

/// Provides CRUD operations for employees plus the merge operation.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an employee by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by exact name (case-sensitive). Used for
    /// uniqueness checks and by the importer.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE name = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List employees in insertion order (id ascending), paginated.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let limit = clamp_limit(limit, 100, 1000);
        let offset = clamp_offset(offset);
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Employee>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Insert a new employee, returning the created row.
    ///
    /// A duplicate name surfaces as [`CoreError::Conflict`].
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, CoreError> {
        let query = format!(
            "INSERT INTO employees (name, color, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.role)
            .fetch_one(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CoreError::Conflict(format!("employee '{}' already exists", input.name))
                } else {
                    CoreError::Internal(err.to_string())
                }
            })
    }

    /// Full-replace update of all employee fields.
    ///
    /// Fails with [`CoreError::NotFound`] when the id is absent and
    /// [`CoreError::Conflict`] when the new name collides.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateEmployee,
    ) -> Result<Employee, CoreError> {
        let query = format!(
            "UPDATE employees SET name = $2, color = $3, role = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.role)
            .fetch_optional(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CoreError::Conflict(format!("employee '{}' already exists", input.name))
                } else {
                    CoreError::Internal(err.to_string())
                }
            })?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id,
            })
    }

    /// Delete an employee, returning the removed row.
    ///
    /// Rejected with [`CoreError::Conflict`] (reporting the count) while
    /// the employee still owns weapons. Check and delete run in one
    /// transaction; `FOR UPDATE` on the employee row holds off concurrent
    /// weapon inserts (their FK check takes a key-share lock) until the
    /// count is settled.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Employee, CoreError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 FOR UPDATE");
        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id,
            })?;

        let weapon_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM weapons WHERE employe_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|err| CoreError::Internal(err.to_string()))?;
        if weapon_count > 0 {
            return Err(CoreError::Conflict(format!(
                "cannot delete employee {id}: {weapon_count} weapons are still assigned; \
                 reassign or delete them first"
            )));
        }

        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        tx.commit()
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        Ok(employee)
    }

    /// Merge several employees into `target_id`.
    ///
    /// Every weapon owned by a source employee is reassigned to the
    /// target, then the source row is deleted. The whole batch runs in
    /// one transaction; any failure rolls everything back. `target_id`
    /// appearing in `source_ids` is silently skipped. Returns the
    /// refreshed target employee.
    pub async fn merge(
        pool: &PgPool,
        source_ids: &[DbId],
        target_id: DbId,
    ) -> Result<Employee, CoreError> {
        Self::find_by_id(pool, target_id)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id: target_id,
            })?;

        // Validate every source before touching anything.
        let mut to_merge = Vec::new();
        for &source_id in source_ids {
            if source_id == target_id {
                continue;
            }
            Self::find_by_id(pool, source_id)
                .await
                .map_err(|err| CoreError::Internal(err.to_string()))?
                .ok_or(CoreError::NotFound {
                    entity: "Employee",
                    id: source_id,
                })?;
            to_merge.push(source_id);
        }

        tracing::debug!(sources = ?to_merge, target_id, "merging employees");

        Self::merge_tx(pool, &to_merge, target_id)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        Self::find_by_id(pool, target_id)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id: target_id,
            })
    }

    /// Transactional body of [`merge`](Self::merge): reassign then delete
    /// each source, commit once.
    async fn merge_tx(pool: &PgPool, source_ids: &[DbId], target_id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for &source_id in source_ids {
            sqlx::query("UPDATE weapons SET employe_id = $2 WHERE employe_id = $1")
                .bind(source_id)
                .bind(target_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query("DELETE FROM employees WHERE id = $1")
                .bind(source_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
