//! Route definitions for the `/base-weapons` catalog resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::base_weapon;
use crate::state::AppState;

/// Routes mounted at `/base-weapons`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(base_weapon::list).post(base_weapon::create))
        .route(
            "/{id}",
            get(base_weapon::get_by_id)
                .put(base_weapon::update)
                .delete(base_weapon::delete),
        )
}
