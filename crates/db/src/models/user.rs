//! User entity model and DTOs.
//!
//! Users carry an open `userType` string ("Admin" | "Client" | "Vendor" |
//! "Employee"). Vendor-scoped resources resolve their owner against this
//! table by email before any mutation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// User type required for vendor-owned resources.
pub const USER_TYPE_VENDOR: &str = "Vendor";

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub user_type: String,
}

/// Query parameters for `GET /api/users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    pub user_type: Option<String>,
}
