//! Handlers for the `/projects` resource.
//!
//! Projects carry a date-order invariant: `end_date`, when present, must
//! not precede `start_date` (equality is allowed). Creates validate the
//! incoming pair; updates validate the pair the merge would produce.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};
use stafflink_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

fn check_date_order(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), AppError> {
    if matches!(end, Some(end) if end < start) {
        return Err(AppError::BadRequest(
            "End date cannot be before start date".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<Json<ListResponse<Project>>> {
    let projects = ProjectRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(projects)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    require_fields(&[
        ("name", &input.name),
        ("description", &input.description),
        ("location", &input.location),
        ("status", &input.status),
    ])?;
    check_date_order(input.start_date, input.end_date)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    // Validate the dates the merge-patch would produce, not just the ones
    // supplied in this request.
    if input.start_date.is_some() || input.end_date.is_some() {
        let current = ProjectRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            }))?;
        let start = input.start_date.unwrap_or(current.start_date);
        let end = input.end_date.or(current.end_date);
        check_date_order(start, end)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Project deleted")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
