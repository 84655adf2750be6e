//! JSON snapshot loading.

use std::path::Path;

use armurerie_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::record::{BaseWeaponRecord, EmployeeRecord, WeaponRecord};

/// The three JSON exports, already deserialized.
#[derive(Debug)]
pub struct Snapshot {
    pub weapons: Vec<WeaponRecord>,
    pub employees: Vec<EmployeeRecord>,
    pub base_weapons: Vec<BaseWeaponRecord>,
}

impl Snapshot {
    /// Load the three snapshot files. Each file must be a JSON array of
    /// flat objects keyed by the entity's column names.
    pub fn load(
        weapons_path: &Path,
        employees_path: &Path,
        base_weapons_path: &Path,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            weapons: load_array(weapons_path)?,
            employees: load_array(employees_path)?,
            base_weapons: load_array(base_weapons_path)?,
        })
    }
}

fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CoreError> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| CoreError::Internal(format!("cannot read {}: {err}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|err| CoreError::Validation(format!("invalid JSON in {}: {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_array_deserializes() {
        let json = r#"[
            {"id": 1, "horodateur": "2023-05-17 12:30:00", "employe_id": 2,
             "detenteur": "Marston", "nom_arme": "Revolver", "serigraphie": "Aigle",
             "prix": 1250}
        ]"#;
        let weapons: Vec<WeaponRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(weapons[0].id, 1);
        assert_eq!(weapons[0].prix, 1250);
    }

    #[test]
    fn employee_color_may_be_null_or_absent() {
        let json = r#"[
            {"id": 1, "name": "Alice", "color": null, "role": "EMPLOYEE"},
            {"id": 2, "name": "Bob", "role": "PATRON"}
        ]"#;
        let employees: Vec<EmployeeRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(employees[0].color, None);
        assert_eq!(employees[1].color, None);
        assert_eq!(employees[1].role, "PATRON");
    }
}
