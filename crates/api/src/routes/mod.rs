pub mod blogs;
pub mod client_projects;
pub mod health;
pub mod projects;
pub mod users;
pub mod vendor_history;
pub mod vendor_services;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                       list, create
/// /users/{email}               get by email
///
/// /blogs                       list, create
/// /blogs/{id}                  get, update, delete
///
/// /projects                    list, create
/// /projects/{id}               get, update, delete
///
/// /client/projects             list (clientEmail scope), create
/// /client/projects/{id}        update, delete (clientEmail scope)
///
/// /vendor/history              list (vendorEmail scope), create
/// /vendor/history/{id}         update, delete (vendorEmail scope)
///
/// /vendor/services             list (email + type), create
/// /vendor/services/{id}        update, delete (vendorEmail scope)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/blogs", blogs::router())
        .nest("/projects", projects::router())
        .nest("/client/projects", client_projects::router())
        .nest("/vendor/history", vendor_history::router())
        .nest("/vendor/services", vendor_services::router())
}
