//! Request extractors that report failures in the standard error envelope.
//!
//! Axum's stock `Json`/`Path`/`Query` rejections reply with plain text (and,
//! for JSON, a 422 on type mismatches). These wrappers route every
//! malformed-input rejection through [`AppError`] instead, so callers always
//! get a 400 with the `{success, error, code}` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. A missing or malformed body is a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor. A malformed identifier is rejected before any
/// store access.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor. A missing required parameter is a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
