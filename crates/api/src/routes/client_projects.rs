//! Route definitions for the `/client/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::client_projects;
use crate::state::AppState;

/// Routes mounted at `/client/projects`.
///
/// ```text
/// GET    /        -> list    (?clientEmail=&status=)
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete  (?clientEmail=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(client_projects::list).post(client_projects::create),
        )
        .route(
            "/{id}",
            put(client_projects::update).delete(client_projects::delete),
        )
}
