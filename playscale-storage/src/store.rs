//! Async tabular store trait
//!
//! The storage backend is opaque to the intake core: anything that can
//! get-or-create a named sheet, append rows, read them back, and accept
//! cosmetic formatting hints can back the service. Implementations must
//! ensure appends are serialized per sheet; the intake layer performs no
//! locking of its own.

use ::async_trait::async_trait;
use playscale_core::{CellValue, IntakeResult};
use serde::{Deserialize, Serialize};

/// Cosmetic styling for one row. Presentation only, never a correctness
/// concern; backends may ignore it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStyle {
    pub background: Option<String>,
    pub font_color: Option<String>,
    pub bold: bool,
    pub font_size: Option<u8>,
}

impl RowStyle {
    /// Style with only a background color.
    pub fn with_background(color: impl Into<String>) -> Self {
        Self {
            background: Some(color.into()),
            ..Self::default()
        }
    }
}

/// Async trait over the tabular storage backend.
///
/// Rows are 1-indexed: the header occupies row 1, the first body row is
/// row 2. All methods may fail with `IntakeError::StorageUnavailable` when
/// the backend cannot be reached or written; failures are surfaced, never
/// retried here.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Get or create the sheet with the given logical name.
    async fn ensure_sheet(&self, name: &str) -> IntakeResult<()>;

    /// Number of rows currently in the sheet (header included).
    async fn row_count(&self, name: &str) -> IntakeResult<usize>;

    /// Append a row after the current last row; returns its 1-indexed
    /// position.
    async fn append_row(&self, name: &str, cells: &[CellValue]) -> IntakeResult<usize>;

    /// Read all rows at 1-indexed positions >= `from_row`.
    async fn read_rows(&self, name: &str, from_row: usize) -> IntakeResult<Vec<Vec<CellValue>>>;

    /// Set the display format of one cell (1-indexed row and column).
    async fn set_number_format(
        &self,
        name: &str,
        row: usize,
        col: usize,
        format: &str,
    ) -> IntakeResult<()>;

    /// Set the cosmetic style of one row.
    async fn set_row_style(&self, name: &str, row: usize, style: RowStyle) -> IntakeResult<()>;
}
