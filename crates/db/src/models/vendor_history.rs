//! Vendor project history entity model and DTOs.
//!
//! History entries record completed engagements; `status` is stamped
//! "Completed" at creation and mutations only match rows still in that
//! state for the requesting vendor.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A history row from the `vendor_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorHistory {
    pub id: DbId,
    pub vendor_email: String,
    pub title: String,
    pub description: String,
    pub client_email: String,
    pub year: i32,
    pub technologies: Vec<String>,
    pub budget: Option<f64>,
    pub duration: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a history entry. `vendor_email` must resolve to a
/// "Vendor"-typed user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorHistory {
    pub vendor_email: String,
    pub title: String,
    pub description: String,
    pub client_email: String,
    pub year: i32,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub budget: Option<f64>,
    pub duration: Option<String>,
}

/// DTO for updating a history entry. `vendor_email` identifies the
/// requesting owner; the remaining fields are optional (merge-patch).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorHistory {
    pub vendor_email: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_email: Option<String>,
    pub year: Option<i32>,
    pub technologies: Option<Vec<String>>,
    pub budget: Option<f64>,
    pub duration: Option<String>,
}

/// Query parameters for `GET /api/vendor/history`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorHistoryListParams {
    pub vendor_email: String,
    pub year: Option<i32>,
    /// Case-insensitive substring match over title, description, and
    /// client email.
    pub search: Option<String>,
}

/// Query parameters for `DELETE /api/vendor/history/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorHistoryOwnerParams {
    pub vendor_email: String,
}
