//! Handlers for the `/vendor/services` resource.
//!
//! One route family serves three logical listings (services, packages,
//! pricing tiers) discriminated by the `type` field. Unknown types are
//! rejected before any store access.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::vendor_service::{
    CreateVendorService, UpdateVendorService, VendorService, VendorServiceListParams,
    VendorServiceOwnerParams, SERVICE_TYPES,
};
use stafflink_db::repositories::VendorServiceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

fn check_service_type(value: &str) -> Result<(), AppError> {
    if !SERVICE_TYPES.contains(&value) {
        return Err(AppError::BadRequest(format!(
            "Invalid service type: {value}"
        )));
    }
    Ok(())
}

/// GET /api/vendor/services?email=&type=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<VendorServiceListParams>,
) -> AppResult<Json<ListResponse<VendorService>>> {
    if let Some(service_type) = params.service_type.as_deref() {
        check_service_type(service_type)?;
    }

    let services = VendorServiceRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(services)))
}

/// POST /api/vendor/services
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVendorService>,
) -> AppResult<(StatusCode, Json<DataResponse<VendorService>>)> {
    require_fields(&[
        ("vendorEmail", &input.vendor_email),
        ("title", &input.title),
    ])?;
    check_service_type(&input.service_type)?;

    let service = VendorServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        service_id = %service.id,
        vendor = %service.vendor_email,
        service_type = %service.service_type,
        "Service listing created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(service))))
}

/// PUT /api/vendor/services/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVendorService>,
) -> AppResult<Json<DataResponse<VendorService>>> {
    require_fields(&[("vendorEmail", &input.vendor_email)])?;

    let service = VendorServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service listing",
            id,
        }))?;
    Ok(Json(DataResponse::new(service)))
}

/// DELETE /api/vendor/services/{id}?vendorEmail=
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<VendorServiceOwnerParams>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = VendorServiceRepo::delete(&state.pool, id, &params.vendor_email).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Service listing deleted")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service listing",
            id,
        }))
    }
}
