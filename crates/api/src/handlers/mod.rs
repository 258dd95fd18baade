//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (list, create, update,
//! delete) for a single entity type. Handlers delegate to the corresponding
//! repository in `stafflink_db` and map errors via [`AppError`].

pub mod blogs;
pub mod client_projects;
pub mod projects;
pub mod users;
pub mod vendor_history;
pub mod vendor_services;

use crate::error::AppError;

/// Reject a request whose required string fields are missing or blank.
///
/// Typed DTOs already make absent fields a deserialization failure; this
/// catches present-but-empty values, which the frontend treats the same way.
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required field: {name}"
            )));
        }
    }
    Ok(())
}
