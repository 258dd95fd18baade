//! Vendor service listing entity model and DTOs.
//!
//! One table backs three logical listings, discriminated by `service_type`
//! ("service" | "package" | "pricing"). Per-type fields live in the
//! free-form `details` JSON object.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// Accepted `service_type` discriminator values.
pub const SERVICE_TYPES: [&str; 3] = ["service", "package", "pricing"];

/// A listing row from the `vendor_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorService {
    pub id: DbId,
    pub vendor_email: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub title: String,
    pub details: serde_json::Value,
    pub price: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a listing. `vendor_email` must resolve to a
/// "Vendor"-typed user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorService {
    pub vendor_email: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub title: String,
    /// Defaults to an empty object when omitted.
    pub details: Option<serde_json::Value>,
    pub price: Option<f64>,
}

/// DTO for updating a listing. `vendor_email` identifies the requesting
/// owner; the remaining fields are optional (merge-patch).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorService {
    pub vendor_email: String,
    pub title: Option<String>,
    pub details: Option<serde_json::Value>,
    pub price: Option<f64>,
}

/// Query parameters for `GET /api/vendor/services`.
#[derive(Debug, Deserialize)]
pub struct VendorServiceListParams {
    pub email: String,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
}

/// Query parameters for `DELETE /api/vendor/services/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorServiceOwnerParams {
    pub vendor_email: String,
}
