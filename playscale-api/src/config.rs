//! Intake service configuration
//!
//! Configuration is loaded from environment variables once at startup with
//! development defaults, then passed explicitly into the router
//! constructor. Nothing here is runtime-mutable and there is no
//! process-wide singleton.

/// Configuration for the intake service: which store to open and the
/// logical sheet name submissions are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Store identifier: `memory:` or a directory path for the JSON-file
    /// backend.
    pub store_id: String,

    /// Logical sheet name inside the store.
    pub sheet_name: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            store_id: "memory:".to_string(),
            sheet_name: "Playful Diagnosis Responses".to_string(),
        }
    }
}

impl IntakeConfig {
    /// Create IntakeConfig from environment variables.
    ///
    /// Environment variables:
    /// - `PLAYSCALE_STORE_ID`: store identifier (default: `memory:`)
    /// - `PLAYSCALE_SHEET_NAME`: logical sheet name
    ///   (default: `Playful Diagnosis Responses`)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let store_id = std::env::var("PLAYSCALE_STORE_ID")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.store_id);

        let sheet_name = std::env::var("PLAYSCALE_SHEET_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.sheet_name);

        Self {
            store_id,
            sheet_name,
        }
    }
}
