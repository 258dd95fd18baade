//! Route definitions for the `/vendor/history` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::vendor_history;
use crate::state::AppState;

/// Routes mounted at `/vendor/history`.
///
/// ```text
/// GET    /        -> list    (?vendorEmail=&year=&search=)
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete  (?vendorEmail=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vendor_history::list).post(vendor_history::create))
        .route(
            "/{id}",
            put(vendor_history::update).delete(vendor_history::delete),
        )
}
