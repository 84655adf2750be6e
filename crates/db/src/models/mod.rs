//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Updates are full replaces, so the create DTO doubles as the update
//! payload; there are no partial-patch DTOs.

pub mod base_weapon;
pub mod employee;
pub mod weapon;
