//! Entity models and request/response DTOs.
//!
//! Wire field names are camelCase (matching the frontend contract); database
//! columns stay snake_case.

pub mod blog;
pub mod client_project;
pub mod project;
pub mod user;
pub mod vendor_history;
pub mod vendor_service;
