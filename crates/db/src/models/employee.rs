//! Employee entity model and DTOs.

use armurerie_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employee role, stored as TEXT (`'EMPLOYEE'` / `'PATRON'`) with a CHECK
/// constraint rather than a PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
pub enum Role {
    Employee,
    Patron,
}

impl Default for Role {
    fn default() -> Self {
        Role::Employee
    }
}

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub role: Role,
}

/// DTO for creating an employee. Also used for updates (full replace).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub color: Option<String>,
    /// Defaults to `EMPLOYEE` if omitted.
    #[serde(default)]
    pub role: Role,
}

/// Request body for merging several employees into one surviving target.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeEmployees {
    pub employee_ids: Vec<DbId>,
    pub target_id: DbId,
}

/// Request body for bulk weapon reassignment between two employees.
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignWeapons {
    pub from_employee_id: DbId,
    pub to_employee_id: DbId,
}
