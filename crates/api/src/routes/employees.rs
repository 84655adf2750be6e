//! Route definitions for the `/employees` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// POST   /merge               -> merge
/// POST   /reassign-weapons    -> reassign_weapons
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/weapons        -> list_weapons
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::list).post(employee::create))
        .route("/merge", post(employee::merge))
        .route("/reassign-weapons", post(employee::reassign_weapons))
        .route(
            "/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route("/{id}/weapons", get(employee::list_weapons))
}
