//! Weapon entity model and DTOs.

use armurerie_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered weapon row from the `weapons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Weapon {
    pub id: DbId,
    /// Registration timestamp from the original paper registry.
    pub horodateur: Timestamp,
    pub employe_id: DbId,
    /// Holder name, free text.
    pub detenteur: String,
    pub nom_arme: String,
    pub serigraphie: String,
    /// Price in cents.
    pub prix: i64,
}

/// DTO for creating a weapon. Also used for updates (full replace).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWeapon {
    pub horodateur: Timestamp,
    pub employe_id: DbId,
    pub detenteur: String,
    pub nom_arme: String,
    pub serigraphie: String,
    pub prix: i64,
}
