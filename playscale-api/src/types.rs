//! API response types
//!
//! Every endpoint answers with a JSON envelope carrying `success`, a
//! message, and a server-side timestamp; the submit path adds the stored
//! row's 1-indexed position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use playscale_core::SurveyStats;

/// Response envelope for the submit and health endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_number: Option<usize>,
}

impl SubmitResponse {
    /// Success envelope without a row number (health check).
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
            row_number: None,
        }
    }

    /// Success envelope for a stored submission.
    pub fn stored(row_number: usize) -> Self {
        Self {
            success: true,
            message: "stored".to_string(),
            timestamp: Utc::now(),
            row_number: Some(row_number),
        }
    }

    /// Failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            timestamp: Utc::now(),
            row_number: None,
        }
    }
}

/// Response for the administrative stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub stats: SurveyStats,
}

impl StatsResponse {
    pub fn new(stats: SurveyStats) -> Self {
        Self {
            success: true,
            timestamp: Utc::now(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_envelope_serialization() {
        let json = serde_json::to_string(&SubmitResponse::stored(2)).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"rowNumber\":2"));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_failure_envelope_omits_row_number() {
        let json = serde_json::to_string(&SubmitResponse::failure("nope")).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("rowNumber"));
    }
}
