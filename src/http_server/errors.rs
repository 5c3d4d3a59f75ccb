//! # Dashboard API Errors
//!
//! Request-level errors for the dashboard HTTP surface. These are never
//! process-fatal: one bad request must not take the dashboard down for
//! other clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for dashboard request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Dashboard API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A query parameter failed to parse
    #[error("Invalid query parameter '{name}': {reason}")]
    InvalidQueryParam { name: String, reason: String },
}

impl ApiError {
    pub fn invalid_param(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::InvalidQueryParam {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error envelope returned to the client
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
