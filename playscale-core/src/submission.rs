//! Submission payload and record types
//!
//! `SubmissionPayload` is the raw wire shape: every field is optional so
//! that absence is detected explicitly during validation instead of through
//! dynamic field access. `SubmissionRecord` is the validated, immutable
//! form consumed exactly once by the row codec.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw submission payload as received on the wire.
///
/// All fields are optional; the validator decides which are required.
/// Unknown fields are ignored. Non-numeric values in numeric positions fail
/// deserialization outright rather than being coerced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Client-side submission time, expected RFC 3339.
    pub timestamp: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub total_score: Option<f64>,
    pub factor1: Option<f64>,
    pub factor2: Option<f64>,
    pub factor3: Option<f64>,
    pub factor4: Option<f64>,
    pub factor5: Option<f64>,
    pub user_agent: Option<String>,
    /// Answers keyed by question index ("1".."25" on the wire).
    pub answers: Option<BTreeMap<u8, serde_json::Value>>,
}

/// A validated submission, ready for encoding into a sheet row.
///
/// Immutable once produced by [`crate::validation::validate`]; consumed
/// exactly once to produce one stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    /// Raw timestamp string; parsed into a date value by the codec.
    pub submitted_at: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub email: String,
    pub total_score: f64,
    /// The five factor sub-scale scores, in order.
    pub factors: [f64; 5],
    pub user_agent: Option<String>,
    /// Answers keyed by question index 1..=25; missing indices encode as empty.
    pub answers: BTreeMap<u8, serde_json::Value>,
}

impl SubmissionPayload {
    /// Parse a payload from a JSON document.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
