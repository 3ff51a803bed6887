//! Survey sheet facade
//!
//! `SurveySheet` is the single entry point the API layer uses for storage:
//! schema bootstrap (header creation), row append with the cosmetic pass,
//! and the aggregate read path. It owns the logical sheet name; the backend
//! behind it is the opaque [`TabularStore`].

use std::sync::Arc;

use playscale_core::{
    compute_stats, sheet_columns, CellValue, IntakeResult, SurveyStats, DATE_DISPLAY_FORMAT,
    EVEN_ROW_BACKGROUND, HEADER_BACKGROUND, SCORE_COLUMNS, SCORE_DISPLAY_FORMAT, TIMESTAMP_COLUMN,
};

use crate::store::{RowStyle, TabularStore};

/// First body row; row 1 is the header.
pub const FIRST_BODY_ROW: usize = 2;

/// Facade over one survey sheet in a tabular store.
#[derive(Clone)]
pub struct SurveySheet {
    store: Arc<dyn TabularStore>,
    name: String,
}

impl SurveySheet {
    pub fn new(store: Arc<dyn TabularStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    /// The configured logical sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ensure the sheet exists and carries its header row.
    ///
    /// Idempotent: on a sheet with at least one row this performs no
    /// mutation. Header styling is cosmetic and does not fail the
    /// bootstrap.
    pub async fn ensure_ready(&self) -> IntakeResult<()> {
        self.store.ensure_sheet(&self.name).await?;

        if self.store.row_count(&self.name).await? == 0 {
            let header: Vec<CellValue> = sheet_columns()
                .iter()
                .map(|column| CellValue::Text(column.label.clone()))
                .collect();
            let row = self.store.append_row(&self.name, &header).await?;
            tracing::info!(sheet = %self.name, "Created header row");

            let style = RowStyle {
                background: Some(HEADER_BACKGROUND.to_string()),
                font_color: Some("white".to_string()),
                bold: true,
                font_size: Some(10),
            };
            if let Err(e) = self.store.set_row_style(&self.name, row, style).await {
                tracing::warn!(sheet = %self.name, error = %e, "Header styling failed");
            }
        }

        Ok(())
    }

    /// Append one encoded submission row; returns its 1-indexed position.
    ///
    /// The cosmetic pass (display formats, zebra striping) runs after the
    /// data write and never fails the submission.
    pub async fn append(&self, cells: &[CellValue]) -> IntakeResult<usize> {
        let row = self.store.append_row(&self.name, cells).await?;

        if let Err(e) = self.format_row(row).await {
            tracing::warn!(sheet = %self.name, row, error = %e, "Row formatting failed");
        }

        Ok(row)
    }

    /// Apply per-row display formatting: date format on the timestamp cell,
    /// two decimal places on the score cells, alternate shading on even
    /// rows.
    async fn format_row(&self, row: usize) -> IntakeResult<()> {
        self.store
            .set_number_format(&self.name, row, TIMESTAMP_COLUMN, DATE_DISPLAY_FORMAT)
            .await?;

        for col in SCORE_COLUMNS {
            self.store
                .set_number_format(&self.name, row, col, SCORE_DISPLAY_FORMAT)
                .await?;
        }

        if row % 2 == 0 {
            self.store
                .set_row_style(&self.name, row, RowStyle::with_background(EVEN_ROW_BACKGROUND))
                .await?;
        }

        Ok(())
    }

    /// Number of rows currently stored (header included).
    pub async fn row_count(&self) -> IntakeResult<usize> {
        self.store.row_count(&self.name).await
    }

    /// Read all body rows (everything after the header).
    pub async fn body_rows(&self) -> IntakeResult<Vec<Vec<CellValue>>> {
        self.store.read_rows(&self.name, FIRST_BODY_ROW).await
    }

    /// Compute summary statistics over all stored submissions.
    ///
    /// A sheet that was never bootstrapped counts as zero responses.
    pub async fn stats(&self) -> IntakeResult<SurveyStats> {
        match self.body_rows().await {
            Ok(rows) => Ok(compute_stats(&rows)),
            Err(_) => Ok(SurveyStats::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use playscale_core::{encode_row, validate, SubmissionPayload};
    use std::collections::BTreeMap;

    fn sheet_with_store() -> (SurveySheet, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let sheet = SurveySheet::new(store.clone(), "responses");
        (sheet, store)
    }

    fn payload(age: i64) -> SubmissionPayload {
        let answers: BTreeMap<u8, serde_json::Value> =
            (1..=25).map(|i| (i, serde_json::json!(((i as i64) % 5) + 1))).collect();
        SubmissionPayload {
            timestamp: Some("2025-06-01T10:00:00Z".to_string()),
            name: Some("Test".to_string()),
            age: Some(age),
            gender: Some("other".to_string()),
            email: Some("t@example.com".to_string()),
            total_score: Some(3.0),
            factor1: Some(3.0),
            factor2: Some(3.0),
            factor3: Some(3.0),
            factor4: Some(3.0),
            factor5: Some(3.0),
            user_agent: None,
            answers: Some(answers),
        }
    }

    fn encoded(age: i64) -> Vec<CellValue> {
        encode_row(&validate(&payload(age)).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_bootstrap_writes_header_once() {
        let (sheet, store) = sheet_with_store();
        sheet.ensure_ready().await.unwrap();
        sheet.ensure_ready().await.unwrap();

        assert_eq!(sheet.row_count().await.unwrap(), 1);
        let header = store.read_rows("responses", 1).await.unwrap();
        assert_eq!(header[0][0], CellValue::Text("Diagnosed At".to_string()));
        assert_eq!(header[0][36], CellValue::Text("Q25".to_string()));

        let style = store.row_style("responses", 1).unwrap();
        assert!(style.bold);
        assert_eq!(style.background.as_deref(), Some(HEADER_BACKGROUND));
    }

    #[tokio::test]
    async fn test_sequential_appends_land_on_rows_two_and_three() {
        let (sheet, _) = sheet_with_store();
        sheet.ensure_ready().await.unwrap();

        assert_eq!(sheet.append(&encoded(20)).await.unwrap(), 2);
        assert_eq!(sheet.append(&encoded(30)).await.unwrap(), 3);
        assert_eq!(sheet.row_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_cosmetic_pass_applied() {
        let (sheet, store) = sheet_with_store();
        sheet.ensure_ready().await.unwrap();
        sheet.append(&encoded(20)).await.unwrap(); // row 2
        sheet.append(&encoded(30)).await.unwrap(); // row 3

        assert_eq!(
            store.number_format("responses", 2, TIMESTAMP_COLUMN).as_deref(),
            Some(DATE_DISPLAY_FORMAT)
        );
        for col in SCORE_COLUMNS {
            assert_eq!(
                store.number_format("responses", 2, col).as_deref(),
                Some(SCORE_DISPLAY_FORMAT)
            );
        }

        // Zebra striping on even rows only
        assert_eq!(
            store.row_style("responses", 2).unwrap().background.as_deref(),
            Some(EVEN_ROW_BACKGROUND)
        );
        assert!(store.row_style("responses", 3).is_none());
    }

    #[tokio::test]
    async fn test_answers_round_trip_in_position() {
        let (sheet, _) = sheet_with_store();
        sheet.ensure_ready().await.unwrap();
        let cells = encoded(25);
        sheet.append(&cells).await.unwrap();

        let body = sheet.body_rows().await.unwrap();
        assert_eq!(body.len(), 1);
        for i in 0..25usize {
            assert_eq!(body[0][12 + i], cells[12 + i], "Q{}", i + 1);
        }
    }

    #[tokio::test]
    async fn test_stats_over_appended_rows() {
        let (sheet, _) = sheet_with_store();

        // Never bootstrapped: zero responses
        assert_eq!(sheet.stats().await.unwrap().total_responses, 0);

        sheet.ensure_ready().await.unwrap();
        assert_eq!(sheet.stats().await.unwrap().total_responses, 0);

        sheet.append(&encoded(20)).await.unwrap();
        sheet.append(&encoded(30)).await.unwrap();

        let stats = sheet.stats().await.unwrap();
        assert_eq!(stats.total_responses, 2);
        assert_eq!(stats.average_age, Some(25.0));
        assert_eq!(stats.gender_distribution.get("other"), Some(&2));
    }
}
