//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Plain lookups return
//! `sqlx::Error`; operations carrying business rules (uniqueness,
//! dependent-record protection, merge) return `CoreError`.

pub mod base_weapon_repo;
pub mod employee_repo;
pub mod weapon_repo;

pub use base_weapon_repo::BaseWeaponRepo;
pub use employee_repo::EmployeeRepo;
pub use weapon_repo::WeaponRepo;

/// PostgreSQL unique constraint violation (SQLSTATE 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}
