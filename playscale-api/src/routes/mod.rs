//! Intake API routes
//!
//! Three endpoints: submission intake (POST), health check (GET), and the
//! administrative stats read path (GET). CORS is permissive by design -
//! submissions come from browser-based questionnaires on arbitrary
//! origins - and OPTIONS preflight is answered by the CORS layer.

pub mod health;
pub mod stats;
pub mod submit;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete intake API router.
pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submissions", post(submit::submit))
        .route("/health", get(health::health))
        .route("/stats", get(stats::stats))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer for browser-based callers.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
