//! Error types for intake operations

use thiserror::Error;

/// Errors that can occur between receiving a submission and storing it.
///
/// Validation and codec errors are detected before any storage mutation;
/// storage errors are surfaced to the caller without retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Required field missing: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' is out of range: must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("Storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Unexpected failure: {reason}")]
    Unexpected { reason: String },
}

impl IntakeError {
    /// Create a MalformedPayload error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    /// Create a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Create an InvalidTimestamp error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create a StorageUnavailable error.
    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an Unexpected error.
    pub fn unexpected(reason: impl Into<String>) -> Self {
        Self::Unexpected {
            reason: reason.into(),
        }
    }
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IntakeError::missing_field("email");
        assert_eq!(err.to_string(), "Required field missing: email");

        let err = IntakeError::out_of_range("age", 18.0, 99.0);
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("18"));
    }

    #[test]
    fn test_equality_on_variants() {
        assert_eq!(
            IntakeError::missing_field("name"),
            IntakeError::missing_field("name")
        );
        assert_ne!(
            IntakeError::missing_field("name"),
            IntakeError::missing_field("email")
        );
    }
}
