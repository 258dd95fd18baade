//! Route definitions for the `/vendor/services` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::vendor_services;
use crate::state::AppState;

/// Routes mounted at `/vendor/services`.
///
/// ```text
/// GET    /        -> list    (?email=&type=)
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete  (?vendorEmail=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vendor_services::list).post(vendor_services::create))
        .route(
            "/{id}",
            put(vendor_services::update).delete(vendor_services::delete),
        )
}
