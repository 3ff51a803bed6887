//! Fixed sheet schema for survey submissions
//!
//! The stored table has a fixed 37-column layout: diagnosis time,
//! demographic fields, six score fields, the user agent, then one column
//! per question (Q1..Q25). The header row uses the `label` of each column;
//! the codec emits cells positionally aligned with this order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of questionnaire answers in the fixed battery.
pub const ANSWER_COUNT: u8 = 25;

/// 1-indexed column of the diagnosis timestamp.
pub const TIMESTAMP_COLUMN: usize = 1;

/// 1-indexed columns holding the six score values (total + five factors).
pub const SCORE_COLUMNS: RangeInclusive<usize> = 6..=11;

/// Display format applied to the timestamp cell of each stored row.
pub const DATE_DISPLAY_FORMAT: &str = "yyyy/mm/dd hh:mm:ss";

/// Display format applied to score cells (two decimal places).
pub const SCORE_DISPLAY_FORMAT: &str = "0.00";

/// Header row background color.
pub const HEADER_BACKGROUND: &str = "#FF8A9B";

/// Background applied to even-numbered rows (zebra striping).
pub const EVEN_ROW_BACKGROUND: &str = "#f8f9fa";

// ============================================================================
// COLUMN DEFINITIONS
// ============================================================================

/// The value type a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    DateTime,
    Text,
    Integer,
    Number,
}

/// One column of the stored table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Stable identifier used in code and logs.
    pub key: String,
    /// Display name written to the header row.
    pub label: String,
    pub kind: ColumnKind,
}

impl Column {
    fn new(key: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

static COLUMNS: Lazy<Vec<Column>> = Lazy::new(|| {
    let mut columns = vec![
        Column::new("diagnosed_at", "Diagnosed At", ColumnKind::DateTime),
        Column::new("name", "Name", ColumnKind::Text),
        Column::new("age", "Age", ColumnKind::Integer),
        Column::new("gender", "Gender", ColumnKind::Text),
        Column::new("email", "Email", ColumnKind::Text),
        Column::new("total_score", "Total Score", ColumnKind::Number),
        Column::new("factor1", "Everyday Enjoyment", ColumnKind::Number),
        Column::new("factor2", "Sense of Freedom", ColumnKind::Number),
        Column::new("factor3", "Creative Activity", ColumnKind::Number),
        Column::new("factor4", "Playful Interaction", ColumnKind::Number),
        Column::new("factor5", "Social Enjoyment", ColumnKind::Number),
        Column::new("user_agent", "User Agent", ColumnKind::Text),
    ];

    for i in 1..=ANSWER_COUNT {
        columns.push(Column::new(
            &format!("q{}", i),
            &format!("Q{}", i),
            ColumnKind::Text,
        ));
    }

    columns
});

/// The fixed column layout of the stored table.
pub fn sheet_columns() -> &'static [Column] {
    &COLUMNS
}
