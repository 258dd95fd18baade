//! Handlers for the `/users` resource.
//!
//! Minimal user management: enough to register the owners (clients,
//! vendors, employees) that scoped resources resolve by email. No
//! authentication or session handling lives here.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stafflink_db::error::RepoError;
use stafflink_db::models::user::{CreateUser, User, UserListParams};
use stafflink_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::require_fields;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /api/users?userType=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserListParams>,
) -> AppResult<Json<ListResponse<User>>> {
    let users = UserRepo::list(&state.pool, &params).await?;
    Ok(Json(ListResponse::new(users)))
}

/// GET /api/users/{email}
pub async fn get_by_email(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Repo(RepoError::OwnerNotFound {
                role: "User",
                email: email.clone(),
            })
        })?;
    Ok(Json(DataResponse::new(user)))
}

/// POST /api/users
///
/// A duplicate email surfaces as a 409 via the `uq_users_email` constraint.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    require_fields(&[
        ("name", &input.name),
        ("email", &input.email),
        ("userType", &input.user_type),
    ])?;

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %user.id, user_type = %user.user_type, "User created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}
