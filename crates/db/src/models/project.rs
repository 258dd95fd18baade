//! Project entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub client: Option<String>,
    pub team_size: Option<i32>,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `end_date`, when present, must not precede `start_date` (equality is
/// allowed); the handler validates this before the insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub client: Option<String>,
    pub team_size: Option<i32>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: Option<String>,
}

/// DTO for updating a project. All fields are optional (merge-patch).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub client: Option<String>,
    pub team_size: Option<i32>,
    pub technologies: Option<Vec<String>>,
    pub image: Option<String>,
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    /// Case-insensitive substring match over name, description, and location.
    pub search: Option<String>,
}
