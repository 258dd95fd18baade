//! Client project (vendor work order) entity model and DTOs.
//!
//! Mutations are scoped to the owning client: update and delete only match
//! rows whose stored `client_email` equals the requesting client's email.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A work order row from the `client_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProject {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub vendor_email: String,
    pub client_email: String,
    pub budget: Option<f64>,
    pub deadline: Option<NaiveDate>,
    /// Open enumeration; new work orders start as "Pending".
    pub status: String,
    pub assigned_employees: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new work order.
///
/// Both `vendor_email` and `client_email` must resolve to existing users;
/// the repository checks this in the same transaction as the insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientProject {
    pub title: String,
    pub description: String,
    pub vendor_email: String,
    pub client_email: String,
    pub budget: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_employees: Vec<String>,
}

/// DTO for updating a work order. `client_email` identifies the requesting
/// owner; the remaining fields are optional (merge-patch).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientProject {
    pub client_email: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub vendor_email: Option<String>,
    pub budget: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<String>,
    pub assigned_employees: Option<Vec<String>>,
}

/// Query parameters for `GET /api/client/projects`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProjectListParams {
    pub client_email: String,
    pub status: Option<String>,
}

/// Query parameters for `DELETE /api/client/projects/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProjectOwnerParams {
    pub client_email: String,
}
