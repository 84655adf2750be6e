//! Route definitions for the `/weapons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::weapon;
use crate::state::AppState;

/// Routes mounted at `/weapons`.
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
        .route("/", get(weapon::list).post(weapon::create))
        .route(
            "/{id}",
            get(weapon::get_by_id)
                .put(weapon::update)
                .delete(weapon::delete),
        )
}
