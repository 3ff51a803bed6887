//! Shared application state

use playscale_storage::SurveySheet;

/// Shared state for all intake routes.
#[derive(Clone)]
pub struct AppState {
    pub sheet: SurveySheet,
}

impl AppState {
    pub fn new(sheet: SurveySheet) -> Self {
        Self { sheet }
    }
}
