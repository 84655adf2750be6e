//! Repository for the `base_weapons` catalog table.
//!
//! Catalog entries carry no business rules beyond existence checks: no
//! uniqueness constraint on the name and no dependent-record protection
//! (unlike employees).

use armurerie_core::error::CoreError;
use armurerie_core::types::DbId;
use sqlx::PgPool;

use crate::models::base_weapon::{BaseWeapon, CreateBaseWeapon};

const COLUMNS: &str = "id, nom, prix_defaut";

pub struct BaseWeaponRepo;

impl BaseWeaponRepo {
    /// All catalog entries, unfiltered, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<BaseWeapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM base_weapons ORDER BY id");
        sqlx::query_as::<_, BaseWeapon>(&query).fetch_all(pool).await
    }

    /// Find a catalog entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BaseWeapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM base_weapons WHERE id = $1");
        sqlx::query_as::<_, BaseWeapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Like [`find_by_id`](Self::find_by_id) but absence is an error.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<BaseWeapon, CoreError> {
        Self::find_by_id(pool, id)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?
            .ok_or(CoreError::NotFound {
                entity: "BaseWeapon",
                id,
            })
    }

    /// Find a catalog entry by exact name.
    pub async fn find_by_name(pool: &PgPool, nom: &str) -> Result<Option<BaseWeapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM base_weapons WHERE nom = $1");
        sqlx::query_as::<_, BaseWeapon>(&query)
            .bind(nom)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new catalog entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBaseWeapon) -> Result<BaseWeapon, sqlx::Error> {
        let query = format!(
            "INSERT INTO base_weapons (nom, prix_defaut)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BaseWeapon>(&query)
            .bind(&input.nom)
            .bind(input.prix_defaut)
            .fetch_one(pool)
            .await
    }

    /// Full-replace update; propagates NotFound from [`get`](Self::get).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateBaseWeapon,
    ) -> Result<BaseWeapon, CoreError> {
        Self::get(pool, id).await?;

        let query = format!(
            "UPDATE base_weapons SET nom = $2, prix_defaut = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BaseWeapon>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(input.prix_defaut)
            .fetch_one(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))
    }

    /// Delete a catalog entry, returning the removed row; propagates
    /// NotFound from [`get`](Self::get).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<BaseWeapon, CoreError> {
        let base_weapon = Self::get(pool, id).await?;

        sqlx::query("DELETE FROM base_weapons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))?;

        Ok(base_weapon)
    }
}
