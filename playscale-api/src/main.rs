//! PLAYSCALE API Server Entry Point
//!
//! Loads configuration, opens the tabular store, and starts the Axum HTTP
//! server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use playscale_api::{create_api_router, ApiError, ApiResult, AppState, IntakeConfig};
use playscale_storage::{open_store, SurveySheet};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("playscale=info,tower_http=info")),
        )
        .init();

    let config = IntakeConfig::from_env();
    let store = open_store(&config.store_id)?;
    let sheet = SurveySheet::new(store, config.sheet_name.clone());
    let state = Arc::new(AppState::new(sheet));

    let app: Router = create_api_router(state);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, store = %config.store_id, sheet = %config.sheet_name, "Starting PLAYSCALE intake server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("PLAYSCALE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("PLAYSCALE_PORT").ok())
        .unwrap_or_else(|| "3000".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::internal_error(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::internal_error(format!("Invalid bind address {}: {}", addr, e)))
}
