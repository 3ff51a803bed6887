//! PLAYSCALE Core - Domain Types and Pure Logic
//!
//! This crate holds everything about a survey submission that does not
//! touch IO: the wire payload and validated record types, the fixed sheet
//! schema, the strict validator, the record-to-cells codec, and the
//! aggregate statistics computation.
//!
//! The storage and HTTP layers live in `playscale-storage` and
//! `playscale-api`; both depend on this crate and never re-implement its
//! rules.

pub mod codec;
pub mod error;
pub mod schema;
pub mod stats;
pub mod submission;
pub mod validation;

// Re-export commonly used types
pub use codec::{encode_row, CellValue};
pub use error::{IntakeError, IntakeResult};
pub use schema::{
    sheet_columns, Column, ColumnKind, ANSWER_COUNT, DATE_DISPLAY_FORMAT, EVEN_ROW_BACKGROUND,
    HEADER_BACKGROUND, SCORE_COLUMNS, SCORE_DISPLAY_FORMAT, TIMESTAMP_COLUMN,
};
pub use stats::{compute_stats, SurveyStats};
pub use submission::{SubmissionPayload, SubmissionRecord};
pub use validation::{validate, ValidateNonEmpty, ValidateRange, AGE_MAX, AGE_MIN, SCORE_MAX, SCORE_MIN};
