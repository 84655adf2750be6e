//! Handlers for the `/base-weapons` catalog resource.

use armurerie_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use armurerie_db::models::base_weapon::{BaseWeapon, CreateBaseWeapon};
use armurerie_db::repositories::BaseWeaponRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/base-weapons -- all entries, unfiltered.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BaseWeapon>>> {
    let base_weapons = BaseWeaponRepo::list(&state.pool).await?;
    Ok(Json(base_weapons))
}

/// POST /api/v1/base-weapons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBaseWeapon>,
) -> AppResult<(StatusCode, Json<BaseWeapon>)> {
    let base_weapon = BaseWeaponRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(base_weapon)))
}

/// GET /api/v1/base-weapons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BaseWeapon>> {
    let base_weapon = BaseWeaponRepo::get(&state.pool, id).await?;
    Ok(Json(base_weapon))
}

/// PUT /api/v1/base-weapons/{id} -- full replace.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBaseWeapon>,
) -> AppResult<Json<BaseWeapon>> {
    let base_weapon = BaseWeaponRepo::update(&state.pool, id, &input).await?;
    Ok(Json(base_weapon))
}

/// DELETE /api/v1/base-weapons/{id} -- returns the deleted row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BaseWeapon>> {
    let base_weapon = BaseWeaponRepo::delete(&state.pool, id).await?;
    Ok(Json(base_weapon))
}
