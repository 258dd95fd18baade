//! Repository for the `blogs` table.

use sqlx::PgPool;
use stafflink_core::text::derive_excerpt;
use stafflink_core::types::DbId;

use crate::models::blog::{Blog, BlogListParams, CreateBlog, UpdateBlog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, category, content, image, excerpt, tags, \
                       date_published, status, views, likes, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new blog post, returning the created row.
    ///
    /// An omitted or blank excerpt is derived from the content. Category
    /// defaults to "General" and status to "published".
    pub async fn create(pool: &PgPool, input: &CreateBlog) -> Result<Blog, sqlx::Error> {
        let excerpt = match input.excerpt.as_deref() {
            Some(e) if !e.trim().is_empty() => e.to_string(),
            _ => derive_excerpt(&input.content),
        };
        let query = format!(
            "INSERT INTO blogs (id, title, author, category, content, image, excerpt, tags,
                                date_published, status)
             VALUES ($1, $2, $3, COALESCE($4, 'General'), $5, $6, $7, $8, $9,
                     COALESCE($10, 'published'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.category)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&excerpt)
            .bind(&input.tags)
            .bind(input.date_published)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a blog post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List blog posts ordered by most recently created first.
    ///
    /// Optional status/category filters plus a case-insensitive substring
    /// search over title, author, and content.
    pub async fn list(pool: &PgPool, params: &BlogListParams) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blogs
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::TEXT IS NULL OR category = $2)
               AND ($3::TEXT IS NULL
                    OR title ILIKE '%' || $3 || '%'
                    OR author ILIKE '%' || $3 || '%'
                    OR content ILIKE '%' || $3 || '%')
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(&params.status)
            .bind(&params.category)
            .bind(&params.search)
            .fetch_all(pool)
            .await
    }

    /// Update a blog post. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlog,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                category = COALESCE($4, category),
                content = COALESCE($5, content),
                image = COALESCE($6, image),
                excerpt = COALESCE($7, excerpt),
                tags = COALESCE($8, tags),
                date_published = COALESCE($9, date_published),
                status = COALESCE($10, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.category)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&input.excerpt)
            .bind(&input.tags)
            .bind(input.date_published)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a blog post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
