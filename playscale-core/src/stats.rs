//! Aggregate statistics over stored rows
//!
//! Administrative, best-effort read path: one pass over body rows, no
//! mutation. Rows that do not decode cleanly (wrong cell type in a column)
//! are skipped rather than failing the whole scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::codec::CellValue;

/// Summary statistics over all stored submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub total_responses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_total_score: Option<f64>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub gender_distribution: HashMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_response_date: Option<DateTime<Utc>>,
}

// 0-based positions of the columns the aggregator reads.
const COL_TIMESTAMP: usize = 0;
const COL_AGE: usize = 2;
const COL_GENDER: usize = 3;
const COL_TOTAL_SCORE: usize = 5;

/// Compute summary statistics over body rows (header excluded).
///
/// Zero rows yields `total_responses: 0` with all other fields absent.
pub fn compute_stats(rows: &[Vec<CellValue>]) -> SurveyStats {
    if rows.is_empty() {
        return SurveyStats::default();
    }

    let mut stats = SurveyStats {
        total_responses: rows.len(),
        ..SurveyStats::default()
    };

    let mut age_sum = 0.0;
    let mut age_count = 0usize;
    let mut score_sum = 0.0;
    let mut score_count = 0usize;

    for row in rows {
        if let Some(CellValue::Integer(age)) = row.get(COL_AGE) {
            age_sum += *age as f64;
            age_count += 1;
        }

        if let Some(CellValue::Number(score)) = row.get(COL_TOTAL_SCORE) {
            score_sum += score;
            score_count += 1;
        }

        if let Some(CellValue::Text(gender)) = row.get(COL_GENDER) {
            *stats.gender_distribution.entry(gender.clone()).or_insert(0) += 1;
        }

        if let Some(CellValue::DateTime(dt)) = row.get(COL_TIMESTAMP) {
            if stats.last_response_date.map_or(true, |last| *dt > last) {
                stats.last_response_date = Some(*dt);
            }
        }
    }

    if age_count > 0 {
        stats.average_age = Some(age_sum / age_count as f64);
    }
    if score_count > 0 {
        stats.average_total_score = Some(score_sum / score_count as f64);
    }

    stats
}
