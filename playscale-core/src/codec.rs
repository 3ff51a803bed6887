//! Row codec
//!
//! Maps a validated [`SubmissionRecord`] to the ordered cell sequence of one
//! sheet row, positionally aligned with [`crate::schema::sheet_columns`].
//! Pure: encoding never touches storage, and cosmetic formatting is the
//! store writer's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, IntakeResult};
use crate::schema::{sheet_columns, ANSWER_COUNT};
use crate::submission::SubmissionRecord;

// ============================================================================
// CELL VALUE
// ============================================================================

/// A typed cell value as stored in the tabular backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    DateTime(DateTime<Utc>),
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Render the cell for display or export.
    pub fn display(&self) -> String {
        match self {
            CellValue::DateTime(dt) => dt.to_rfc3339(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

// ============================================================================
// ENCODER
// ============================================================================

/// Encode a validated record into one row of cells.
///
/// Produces exactly `sheet_columns().len()` values. Answer indices 1..=25
/// missing from the record encode as [`CellValue::Empty`]; an absent
/// `userAgent` encodes as empty text.
///
/// # Errors
/// Returns `IntakeError::InvalidTimestamp` if the record's timestamp is not
/// valid RFC 3339.
pub fn encode_row(record: &SubmissionRecord) -> IntakeResult<Vec<CellValue>> {
    let submitted_at = DateTime::parse_from_rfc3339(&record.submitted_at)
        .map_err(|_| IntakeError::invalid_timestamp(&record.submitted_at))?
        .with_timezone(&Utc);

    let mut cells = Vec::with_capacity(sheet_columns().len());
    cells.push(CellValue::DateTime(submitted_at));
    cells.push(CellValue::Text(record.name.clone()));
    cells.push(CellValue::Integer(record.age));
    cells.push(CellValue::Text(record.gender.clone()));
    cells.push(CellValue::Text(record.email.clone()));
    cells.push(CellValue::Number(record.total_score));
    for factor in record.factors {
        cells.push(CellValue::Number(factor));
    }
    cells.push(CellValue::Text(
        record.user_agent.clone().unwrap_or_default(),
    ));

    for i in 1..=ANSWER_COUNT {
        cells.push(encode_answer(record.answers.get(&i)));
    }

    debug_assert_eq!(cells.len(), sheet_columns().len());
    Ok(cells)
}

fn encode_answer(value: Option<&serde_json::Value>) -> CellValue {
    match value {
        Some(serde_json::Value::Number(n)) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Empty,
        },
        Some(serde_json::Value::String(s)) => CellValue::Text(s.clone()),
        _ => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            submitted_at: "2025-06-01T10:00:00Z".to_string(),
            name: "Taro".to_string(),
            age: 42,
            gender: "male".to_string(),
            email: "taro@example.com".to_string(),
            total_score: 3.5,
            factors: [4.0, 3.0, 3.5, 2.5, 4.5],
            user_agent: None,
            answers: BTreeMap::from([
                (1, serde_json::json!(4)),
                (2, serde_json::json!("sometimes")),
                (25, serde_json::json!(5)),
            ]),
        }
    }

    #[test]
    fn test_row_length_matches_schema() {
        let cells = encode_row(&record()).unwrap();
        assert_eq!(cells.len(), sheet_columns().len());
    }

    #[test]
    fn test_fixed_field_positions() {
        let cells = encode_row(&record()).unwrap();
        assert_eq!(cells[1], CellValue::Text("Taro".to_string()));
        assert_eq!(cells[2], CellValue::Integer(42));
        assert_eq!(cells[5], CellValue::Number(3.5));
        assert_eq!(cells[10], CellValue::Number(4.5));
        // Absent user agent encodes as empty text, not Empty
        assert_eq!(cells[11], CellValue::Text(String::new()));
    }

    #[test]
    fn test_answer_positions_and_defaults() {
        let cells = encode_row(&record()).unwrap();
        // Q1 is the 13th column (index 12)
        assert_eq!(cells[12], CellValue::Number(4.0));
        assert_eq!(cells[13], CellValue::Text("sometimes".to_string()));
        assert_eq!(cells[14], CellValue::Empty); // Q3 absent
        assert_eq!(cells[36], CellValue::Number(5.0)); // Q25
    }

    #[test]
    fn test_malformed_timestamp_rejected() {
        let mut rec = record();
        rec.submitted_at = "yesterday".to_string();
        assert_eq!(
            encode_row(&rec).unwrap_err(),
            IntakeError::invalid_timestamp("yesterday")
        );
    }

    #[test]
    fn test_timestamp_normalized_to_utc() {
        let mut rec = record();
        rec.submitted_at = "2025-06-01T19:00:00+09:00".to_string();
        let cells = encode_row(&rec).unwrap();
        match &cells[0] {
            CellValue::DateTime(dt) => assert_eq!(dt.to_rfc3339(), "2025-06-01T10:00:00+00:00"),
            other => panic!("expected DateTime, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_battery_answers_ignored() {
        let mut rec = record();
        rec.answers.insert(26, serde_json::json!(1));
        rec.answers.insert(0, serde_json::json!(1));
        let cells = encode_row(&rec).unwrap();
        assert_eq!(cells.len(), sheet_columns().len());
    }

    #[test]
    fn test_cell_value_serde_round_trip() {
        let cells = encode_row(&record()).unwrap();
        let json = serde_json::to_string(&cells).unwrap();
        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(cells, back);
    }
}
