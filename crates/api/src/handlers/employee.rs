//! Handlers for the `/employees` resource.

use armurerie_core::error::CoreError;
use armurerie_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use armurerie_db::models::employee::{CreateEmployee, Employee, MergeEmployees, ReassignWeapons};
use armurerie_db::models::weapon::Weapon;
use armurerie_db::repositories::{EmployeeRepo, WeaponRepo};

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/employees?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(employees))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id,
        })?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
///
/// Full replace: every field comes from the payload, optional fields
/// omitted there reset to their defaults.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::update(&state.pool, id, &input).await?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
///
/// Returns the deleted row. Rejected while the employee still owns
/// weapons.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::delete(&state.pool, id).await?;
    Ok(Json(employee))
}

/// GET /api/v1/employees/{id}/weapons
pub async fn list_weapons(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Weapon>>> {
    let weapons = WeaponRepo::list_for_employee(&state.pool, id).await?;
    Ok(Json(weapons))
}

/// POST /api/v1/employees/merge
///
/// Consolidates the given employees (and their weapons) into the target;
/// returns the refreshed target employee.
pub async fn merge(
    State(state): State<AppState>,
    Json(input): Json<MergeEmployees>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::merge(&state.pool, &input.employee_ids, input.target_id).await?;
    Ok(Json(employee))
}

/// Response payload for the reassignment endpoint.
#[derive(Debug, Serialize)]
pub struct ReassignResponse {
    pub count: u64,
    pub message: String,
}

/// POST /api/v1/employees/reassign-weapons
pub async fn reassign_weapons(
    State(state): State<AppState>,
    Json(input): Json<ReassignWeapons>,
) -> AppResult<Json<ReassignResponse>> {
    let count =
        WeaponRepo::reassign(&state.pool, input.from_employee_id, input.to_employee_id).await?;
    Ok(Json(ReassignResponse {
        count,
        message: format!(
            "{count} weapons reassigned from employee {} to {}",
            input.from_employee_id, input.to_employee_id
        ),
    }))
}
