//! Handlers for the `/blogs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::blog::{Blog, BlogListParams, CreateBlog, UpdateBlog};
use stafflink_db::repositories::BlogRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<BlogListParams>,
) -> AppResult<Json<ListResponse<Blog>>> {
    let blogs = BlogRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(blogs)))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Blog>>> {
    let blog = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Blog", id }))?;
    Ok(Json(DataResponse::new(blog)))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBlog>,
) -> AppResult<(StatusCode, Json<DataResponse<Blog>>)> {
    require_fields(&[
        ("title", &input.title),
        ("author", &input.author),
        ("content", &input.content),
    ])?;

    let blog = BlogRepo::create(&state.pool, &input).await?;
    tracing::info!(blog_id = %blog.id, "Blog created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(blog))))
}

/// PUT /api/blogs/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateBlog>,
) -> AppResult<Json<DataResponse<Blog>>> {
    let blog = BlogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Blog", id }))?;
    Ok(Json(DataResponse::new(blog)))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BlogRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Blog deleted")))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Blog", id }))
    }
}
