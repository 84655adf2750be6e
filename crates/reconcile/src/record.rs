//! Row representations shared by the JSON and SQL-dump loaders.
//!
//! Timestamps stay as strings here; the comparison normalizes them to
//! second precision, so a dump's microseconds or timezone suffix never
//! show up as false differences.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponRecord {
    pub id: i64,
    pub horodateur: String,
    pub employe_id: i64,
    pub detenteur: String,
    pub nom_arme: String,
    pub serigraphie: String,
    pub prix: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaseWeaponRecord {
    pub id: i64,
    pub nom: String,
    pub prix_defaut: i64,
}
