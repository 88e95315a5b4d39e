pub mod auth;
pub mod internal;
pub mod menu;
pub mod orders;
pub mod payments;

use axum::{http::StatusCode, Json};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::domain::errors::ApiError;
use crate::interface_adapters::protocol::ErrorResponse;

// Helper to build a JSON error response.
pub(crate) fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Map domain errors onto HTTP status codes.
pub(crate) fn map_api_error(err: ApiError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ApiError::OriginRejected => error_response(StatusCode::FORBIDDEN, "origin not allowed"),
        ApiError::DatabaseUnavailable => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
        }
        ApiError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, &format!("{what} not found"))
        }
        ApiError::Invalid(reason) => error_response(StatusCode::BAD_REQUEST, reason),
        ApiError::Conflict(reason) => error_response(StatusCode::CONFLICT, reason),
        ApiError::Storage(detail) => {
            warn!(error = %detail, "storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage failure")
        }
    }
}

// Wrap a driver error for the generic 500 path.
pub(crate) fn storage_error(err: mongodb::error::Error) -> ApiError {
    ApiError::Storage(err.to_string())
}

pub(crate) fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
