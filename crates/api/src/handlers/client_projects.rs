//! Handlers for the `/client/projects` resource (vendor work orders).
//!
//! Listing and mutation are scoped to the requesting client's email; the
//! repository enforces the ownership match in its WHERE clauses, so a
//! mismatched owner looks identical to a missing row (404).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::client_project::{
    ClientProject, ClientProjectListParams, ClientProjectOwnerParams, CreateClientProject,
    UpdateClientProject,
};
use stafflink_db::repositories::ClientProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/client/projects?clientEmail=&status=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ClientProjectListParams>,
) -> AppResult<Json<ListResponse<ClientProject>>> {
    let projects = ClientProjectRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(projects)))
}

/// POST /api/client/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClientProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ClientProject>>)> {
    require_fields(&[
        ("title", &input.title),
        ("description", &input.description),
        ("vendorEmail", &input.vendor_email),
        ("clientEmail", &input.client_email),
    ])?;

    let project = ClientProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = %project.id,
        client = %project.client_email,
        "Work order created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// PUT /api/client/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateClientProject>,
) -> AppResult<Json<DataResponse<ClientProject>>> {
    require_fields(&[("clientEmail", &input.client_email)])?;

    let project = ClientProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Work order",
            id,
        }))?;
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/client/projects/{id}?clientEmail=
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<ClientProjectOwnerParams>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ClientProjectRepo::delete(&state.pool, id, &params.client_email).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Work order deleted")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Work order",
            id,
        }))
    }
}
