//! In-memory tabular store
//!
//! Used by tests and as the default backend when no store path is
//! configured. Records number formats and row styles so tests can assert
//! on the cosmetic pass as well as the data.

use ::async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use playscale_core::{CellValue, IntakeError, IntakeResult};

use crate::store::{RowStyle, TabularStore};

#[derive(Debug, Default, Clone)]
struct Sheet {
    rows: Vec<Vec<CellValue>>,
    /// (row, col) -> display format, 1-indexed.
    number_formats: HashMap<(usize, usize), String>,
    row_styles: HashMap<usize, RowStyle>,
}

/// Lock-guarded in-memory sheets keyed by logical name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: RwLock<HashMap<String, Sheet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_lock(&self) -> IntakeResult<std::sync::RwLockReadGuard<'_, HashMap<String, Sheet>>> {
        self.sheets
            .read()
            .map_err(|_| IntakeError::storage_unavailable("memory store lock poisoned"))
    }

    fn write_lock(&self) -> IntakeResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Sheet>>> {
        self.sheets
            .write()
            .map_err(|_| IntakeError::storage_unavailable("memory store lock poisoned"))
    }

    fn missing(name: &str) -> IntakeError {
        IntakeError::storage_unavailable(format!("sheet '{}' does not exist", name))
    }

    /// Recorded display format of a cell, for assertions in tests.
    pub fn number_format(&self, name: &str, row: usize, col: usize) -> Option<String> {
        self.read_lock()
            .ok()?
            .get(name)?
            .number_formats
            .get(&(row, col))
            .cloned()
    }

    /// Recorded style of a row, for assertions in tests.
    pub fn row_style(&self, name: &str, row: usize) -> Option<RowStyle> {
        self.read_lock().ok()?.get(name)?.row_styles.get(&row).cloned()
    }
}

#[async_trait]
impl TabularStore for MemoryStore {
    async fn ensure_sheet(&self, name: &str) -> IntakeResult<()> {
        self.write_lock()?.entry(name.to_string()).or_default();
        Ok(())
    }

    async fn row_count(&self, name: &str) -> IntakeResult<usize> {
        let sheets = self.read_lock()?;
        let sheet = sheets.get(name).ok_or_else(|| Self::missing(name))?;
        Ok(sheet.rows.len())
    }

    async fn append_row(&self, name: &str, cells: &[CellValue]) -> IntakeResult<usize> {
        let mut sheets = self.write_lock()?;
        let sheet = sheets.get_mut(name).ok_or_else(|| Self::missing(name))?;
        sheet.rows.push(cells.to_vec());
        Ok(sheet.rows.len())
    }

    async fn read_rows(&self, name: &str, from_row: usize) -> IntakeResult<Vec<Vec<CellValue>>> {
        let sheets = self.read_lock()?;
        let sheet = sheets.get(name).ok_or_else(|| Self::missing(name))?;
        let skip = from_row.saturating_sub(1);
        Ok(sheet.rows.iter().skip(skip).cloned().collect())
    }

    async fn set_number_format(
        &self,
        name: &str,
        row: usize,
        col: usize,
        format: &str,
    ) -> IntakeResult<()> {
        let mut sheets = self.write_lock()?;
        let sheet = sheets.get_mut(name).ok_or_else(|| Self::missing(name))?;
        sheet.number_formats.insert((row, col), format.to_string());
        Ok(())
    }

    async fn set_row_style(&self, name: &str, row: usize, style: RowStyle) -> IntakeResult<()> {
        let mut sheets = self.write_lock()?;
        let sheet = sheets.get_mut(name).ok_or_else(|| Self::missing(name))?;
        sheet.row_styles.insert(row, style);
        Ok(())
    }
}
