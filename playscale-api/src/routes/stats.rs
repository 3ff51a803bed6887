//! Administrative statistics endpoint

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{error::ApiResult, state::AppState, types::StatsResponse};

/// GET /stats - summary statistics over all stored submissions
///
/// Pure read, no mutation. An empty (or never-bootstrapped) sheet yields
/// `totalResponses: 0`.
pub async fn stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatsResponse>> {
    let stats = state.sheet.stats().await?;
    Ok(Json(StatsResponse::new(stats)))
}
