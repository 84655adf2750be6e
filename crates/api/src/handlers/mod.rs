//! HTTP handlers, one module per resource.

pub mod base_weapon;
pub mod employee;
pub mod weapon;
