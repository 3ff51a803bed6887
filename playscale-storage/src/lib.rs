//! PLAYSCALE Storage - Tabular Store Backends
//!
//! This crate defines the opaque tabular storage interface the intake
//! service writes to ([`TabularStore`]), two backends (in-memory and
//! JSON-file), and the [`SurveySheet`] facade that implements schema
//! bootstrap, row append with cosmetic formatting, and the aggregate read
//! path on top of any backend.

pub mod json;
pub mod memory;
pub mod sheet;
pub mod store;

use std::sync::Arc;

use playscale_core::IntakeResult;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use sheet::{SurveySheet, FIRST_BODY_ROW};
pub use store::{RowStyle, TabularStore};

/// Store identifier selecting the in-memory backend.
pub const MEMORY_STORE_ID: &str = "memory:";

/// Open a tabular store from its configured identifier.
///
/// `memory:` selects the in-memory backend; any other identifier is
/// treated as a directory path for the JSON-file backend.
pub fn open_store(id: &str) -> IntakeResult<Arc<dyn TabularStore>> {
    if id == MEMORY_STORE_ID {
        Ok(Arc::new(MemoryStore::new()))
    } else {
        Ok(Arc::new(JsonStore::open(id)?))
    }
}
