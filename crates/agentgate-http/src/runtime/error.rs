//! Unified error handling for the gateway runtime
//!
//! Pre-stream failures (missing resources, malformed identifiers) become
//! structured JSON error responses with mapped status codes. Engine failures
//! after the response has committed to a stream never reach this module;
//! they are converted into terminal `on_chain_error` frames by the executor.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use agentgate_core::{GatewayError, IdValidationError};

/// Type-safe wire codes for runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Thread not found
    ThreadNotFound,
    /// Run not found
    RunNotFound,
    /// Malformed request input
    InvalidInput,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreadNotFound => "thread_not_found",
            Self::RunNotFound => "run_not_found",
            Self::InvalidInput => "invalid_input",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "thread_not_found")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "thread 't1' not found")]
    pub message: String,
    /// Optional additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

/// Error type returned by gateway handlers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(err: IdValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::ThreadNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ErrorCode::ThreadNotFound,
                err.to_string(),
            ),
            GatewayError::RunNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ErrorCode::RunNotFound,
                err.to_string(),
            ),
            GatewayError::Engine(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code.as_str().to_string(),
            message: self.message,
            details: None,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentgate_core::ThreadId;

    #[test]
    fn error_codes_serialize_snake_case() {
        assert_eq!(ErrorCode::ThreadNotFound.as_str(), "thread_not_found");
        assert_eq!(
            serde_json::to_string(&ErrorCode::RunNotFound).unwrap(),
            "\"run_not_found\""
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = GatewayError::ThreadNotFound {
            thread_id: ThreadId::new_unchecked("t1"),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), ErrorCode::ThreadNotFound);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let err = ApiError::invalid_input(ThreadId::parse("bad id").unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }
}
