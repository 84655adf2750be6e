//! Handlers for the `/weapons` resource.

use armurerie_core::error::CoreError;
use armurerie_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use armurerie_db::models::weapon::{CreateWeapon, Weapon};
use armurerie_db::repositories::WeaponRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/weapons?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Weapon>>> {
    let weapons = WeaponRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(weapons))
}

/// POST /api/v1/weapons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWeapon>,
) -> AppResult<(StatusCode, Json<Weapon>)> {
    let weapon = WeaponRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(weapon)))
}

/// GET /api/v1/weapons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Weapon>> {
    let weapon = WeaponRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Weapon",
            id,
        })?;
    Ok(Json(weapon))
}

/// PUT /api/v1/weapons/{id} -- full replace.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWeapon>,
) -> AppResult<Json<Weapon>> {
    let weapon = WeaponRepo::update(&state.pool, id, &input).await?;
    Ok(Json(weapon))
}

/// DELETE /api/v1/weapons/{id} -- returns the deleted row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Weapon>> {
    let weapon = WeaponRepo::delete(&state.pool, id).await?;
    Ok(Json(weapon))
}
