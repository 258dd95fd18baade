//! Blog entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A blog post row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub tags: Vec<String>,
    // Historical wire name; the frontend sends and expects snake_case here.
    #[serde(rename = "date_published")]
    pub date_published: NaiveDate,
    pub status: String,
    pub views: i32,
    pub likes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
///
/// `excerpt` is derived from `content` when omitted; `category` defaults to
/// `"General"` and `status` to `"published"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "date_published")]
    pub date_published: NaiveDate,
    pub status: Option<String>,
}

/// DTO for updating a blog post. All fields are optional (merge-patch).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "date_published")]
    pub date_published: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Query parameters for `GET /api/blogs`.
#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match over title, author, and content.
    pub search: Option<String>,
}
