//! Handlers for the `/vendor/history` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::vendor_history::{
    CreateVendorHistory, UpdateVendorHistory, VendorHistory, VendorHistoryListParams,
    VendorHistoryOwnerParams,
};
use stafflink_db::repositories::VendorHistoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/vendor/history?vendorEmail=&year=&search=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<VendorHistoryListParams>,
) -> AppResult<Json<ListResponse<VendorHistory>>> {
    let entries = VendorHistoryRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(entries)))
}

/// POST /api/vendor/history
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVendorHistory>,
) -> AppResult<(StatusCode, Json<DataResponse<VendorHistory>>)> {
    require_fields(&[
        ("vendorEmail", &input.vendor_email),
        ("title", &input.title),
        ("description", &input.description),
        ("clientEmail", &input.client_email),
    ])?;

    let entry = VendorHistoryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        entry_id = %entry.id,
        vendor = %entry.vendor_email,
        "History entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(entry))))
}

/// PUT /api/vendor/history/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVendorHistory>,
) -> AppResult<Json<DataResponse<VendorHistory>>> {
    require_fields(&[("vendorEmail", &input.vendor_email)])?;

    let entry = VendorHistoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "History entry",
            id,
        }))?;
    Ok(Json(DataResponse::new(entry)))
}

/// DELETE /api/vendor/history/{id}?vendorEmail=
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<VendorHistoryOwnerParams>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = VendorHistoryRepo::delete(&state.pool, id, &params.vendor_email).await?;
    if deleted {
        Ok(Json(MessageResponse::new("History entry deleted")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "History entry",
            id,
        }))
    }
}
