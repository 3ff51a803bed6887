//! Error types for the intake API
//!
//! Every error becomes a `{success: false, message}` JSON envelope over
//! HTTP 200: clients always receive a parseable body, and the failure is
//! communicated inside it rather than via transport-level status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use playscale_core::IntakeError;

use crate::types::SubmitResponse;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses, one per intake failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body cannot be parsed as a submission payload
    MalformedPayload,

    /// Required field is missing from the submission
    MissingField,

    /// Field value is out of valid range
    OutOfRange,

    /// Submission timestamp does not parse as a date
    InvalidTimestamp,

    /// Storage backend unreachable or write rejected
    StorageUnavailable,

    /// Catch-all for unexpected failures
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error for API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a MalformedPayload error.
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedPayload, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        let code = match &err {
            IntakeError::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            IntakeError::MissingField { .. } => ErrorCode::MissingField,
            IntakeError::OutOfRange { .. } => ErrorCode::OutOfRange,
            IntakeError::InvalidTimestamp { .. } => ErrorCode::InvalidTimestamp,
            IntakeError::StorageUnavailable { .. } => ErrorCode::StorageUnavailable,
            IntakeError::Unexpected { .. } => ErrorCode::InternalError,
        };
        Self::new(code, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(SubmitResponse::failure(self.message))).into_response()
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_error_mapping() {
        let err: ApiError = IntakeError::missing_field("email").into();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("email"));

        let err: ApiError = IntakeError::storage_unavailable("down").into();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::OutOfRange).unwrap();
        assert_eq!(json, "\"OUT_OF_RANGE\"");
    }
}
