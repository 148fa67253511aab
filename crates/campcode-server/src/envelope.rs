//! Response envelopes shared by every route: `{ok, data, meta}` on
//! success, `{ok, error, meta}` on failure.

use serde::Serialize;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: T,
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, meta: Meta) -> Self {
        Self {
            ok: true,
            data,
            meta,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: ErrorBody,
    pub meta: Meta,
}

impl ApiErrorResponse {
    pub fn new(code: &str, message: String, details: Option<String>) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
            meta: Meta::now(None),
        }
    }
}

/// Machine-readable error code plus human message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

/// Response metadata: UTC timestamp and request correlation id.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub timestamp: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_ms: Option<u64>,
}

impl Meta {
    /// Builds metadata stamped with the current time; a fresh v4 id is
    /// minted when the caller did not supply one.
    pub fn now(request_id: Option<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            request_id: request_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            processing_ms: None,
        }
    }

    pub fn with_processing_ms(mut self, elapsed_ms: u64) -> Self {
        self.processing_ms = Some(elapsed_ms);
        self
    }
}
