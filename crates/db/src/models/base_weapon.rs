//! Base-weapon catalog model and DTOs.
//!
//! A base weapon is a catalog template (name + default price) with no
//! relation to registered weapons or employees.

use armurerie_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog row from the `base_weapons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BaseWeapon {
    pub id: DbId,
    pub nom: String,
    /// Default price in cents.
    pub prix_defaut: i64,
}

/// DTO for creating a catalog entry. Also used for updates (full replace).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBaseWeapon {
    pub nom: String,
    pub prix_defaut: i64,
}
