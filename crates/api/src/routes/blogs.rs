//! Route definitions for the `/blogs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Routes mounted at `/blogs`.
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
        .route("/", get(blogs::list).post(blogs::create))
        .route(
            "/{id}",
            get(blogs::get_by_id).put(blogs::update).delete(blogs::delete),
        )
}
