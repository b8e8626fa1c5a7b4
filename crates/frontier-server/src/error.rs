//! API error responses.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use frontier_core::{FrontierError, FrontierErrorKind};
use frontier_traits::TraitError;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid inputs or an engine failure.
    #[error(transparent)]
    Frontier(#[from] FrontierError),

    /// Statistics provider failure.
    #[error(transparent)]
    Provider(#[from] TraitError),

    /// The statistics provider did not answer in time.
    #[error("Statistics provider timed out after {0:?}")]
    Timeout(Duration),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
    kind: String,
}

impl ApiError {
    /// HTTP status and machine-readable kind.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Frontier(e) => match e.kind() {
                FrontierErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
                FrontierErrorKind::DegenerateFrontier => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "degenerate_frontier")
                }
                FrontierErrorKind::UnattainableTarget => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "unattainable_target")
                }
            },
            ApiError::Provider(e) => match e {
                TraitError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                TraitError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
                TraitError::InsufficientData(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_data")
                }
                TraitError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
                _ => (StatusCode::BAD_GATEWAY, "provider_error"),
            },
            ApiError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status();
        warn!(status = status.as_u16(), kind, error = %self, "request failed");
        let body = ErrorResponse {
            error: self.to_string(),
            kind: kind.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
