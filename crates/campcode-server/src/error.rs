//! API error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campcode_core::GenerateError;

use crate::envelope::ApiErrorResponse;
use crate::store::StoreError;

/// Errors surfaced to HTTP clients as structured error envelopes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input rejected before or during generation.
    #[error("{0}")]
    Validation(String),

    /// Request body failed to parse as JSON.
    #[error("{0}")]
    InvalidJson(String),

    /// No route matched the request.
    #[error("route not found")]
    NotFound,

    /// Anything unexpected. The message is logged but never sent to the
    /// client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        // Both core error classes are caller-input failures.
        Self::Validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                "unexpected internal error".to_string()
            }
            other => other.to_string(),
        };
        let body = ApiErrorResponse::new(self.code(), message, None);
        (self.status(), Json(body)).into_response()
    }
}

/// Errors from running the server itself, as opposed to per-request
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
