//! JSON-file tabular store
//!
//! Persists each sheet as one JSON document under a directory; the store
//! identifier is the directory path. An async mutex serializes writers, so
//! concurrent appends are applied in some arrival order and each append is
//! atomic from the intake layer's perspective.

use ::async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use playscale_core::{CellValue, IntakeError, IntakeResult};

use crate::store::{RowStyle, TabularStore};

/// On-disk representation of one sheet.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SheetDocument {
    rows: Vec<Vec<CellValue>>,
    /// (row, col, format), 1-indexed.
    number_formats: Vec<(usize, usize, String)>,
    row_styles: Vec<(usize, RowStyle)>,
}

/// File-backed store with one JSON document per sheet.
#[derive(Debug)]
pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> IntakeResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            IntakeError::storage_unavailable(format!(
                "cannot create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn sheet_path(&self, name: &str) -> PathBuf {
        let file: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file))
    }

    async fn load(&self, name: &str) -> IntakeResult<Option<SheetDocument>> {
        let path = self.sheet_path(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let doc = serde_json::from_slice(&bytes).map_err(|e| {
                    IntakeError::storage_unavailable(format!(
                        "corrupt sheet document {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Some(doc))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(&path, e)),
        }
    }

    async fn load_required(&self, name: &str) -> IntakeResult<SheetDocument> {
        self.load(name).await?.ok_or_else(|| {
            IntakeError::storage_unavailable(format!("sheet '{}' does not exist", name))
        })
    }

    async fn save(&self, name: &str, doc: &SheetDocument) -> IntakeResult<()> {
        let path = self.sheet_path(name);
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| IntakeError::storage_unavailable(format!("serialize sheet: {}", e)))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| unavailable(&path, e))
    }
}

fn unavailable(path: &Path, e: std::io::Error) -> IntakeError {
    IntakeError::storage_unavailable(format!("{}: {}", path.display(), e))
}

#[async_trait]
impl TabularStore for JsonStore {
    async fn ensure_sheet(&self, name: &str) -> IntakeResult<()> {
        let _guard = self.write_lock.lock().await;
        if self.load(name).await?.is_none() {
            self.save(name, &SheetDocument::default()).await?;
        }
        Ok(())
    }

    async fn row_count(&self, name: &str) -> IntakeResult<usize> {
        Ok(self.load_required(name).await?.rows.len())
    }

    async fn append_row(&self, name: &str, cells: &[CellValue]) -> IntakeResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load_required(name).await?;
        doc.rows.push(cells.to_vec());
        let row = doc.rows.len();
        self.save(name, &doc).await?;
        Ok(row)
    }

    async fn read_rows(&self, name: &str, from_row: usize) -> IntakeResult<Vec<Vec<CellValue>>> {
        let doc = self.load_required(name).await?;
        let skip = from_row.saturating_sub(1);
        Ok(doc.rows.into_iter().skip(skip).collect())
    }

    async fn set_number_format(
        &self,
        name: &str,
        row: usize,
        col: usize,
        format: &str,
    ) -> IntakeResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load_required(name).await?;
        doc.number_formats.push((row, col, format.to_string()));
        self.save(name, &doc).await
    }

    async fn set_row_style(&self, name: &str, row: usize, style: RowStyle) -> IntakeResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load_required(name).await?;
        doc.row_styles.push((row, style));
        self.save(name, &doc).await
    }
}
