pub mod base_weapons;
pub mod employees;
pub mod health;
pub mod weapons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                          list, create
/// /employees/{id}                     get, update, delete
/// /employees/{id}/weapons             weapons owned by the employee
/// /employees/merge                    merge employees (POST)
/// /employees/reassign-weapons         bulk reassignment (POST)
///
/// /weapons                            list, create
/// /weapons/{id}                       get, update, delete
///
/// /base-weapons                       list, create
/// /base-weapons/{id}                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employees::router())
        .nest("/weapons", weapons::router())
        .nest("/base-weapons", base_weapons::router())
}
