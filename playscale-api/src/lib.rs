//! PLAYSCALE API - HTTP Intake Layer
//!
//! This crate exposes the survey intake endpoint over HTTP (Axum): one
//! write path that validates and appends submissions to the configured
//! sheet, a health check, and an administrative stats read path. All
//! domain rules live in `playscale-core`; storage backends live in
//! `playscale-storage`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::IntakeConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_api_router;
pub use state::AppState;
pub use types::{StatsResponse, SubmitResponse};
