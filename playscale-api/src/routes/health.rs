//! Health check endpoint
//!
//! Read-only, touches no storage. Used by monitoring and by clients
//! probing the service before submitting.

use axum::Json;

use crate::types::SubmitResponse;

/// GET /health - static reachability acknowledgment
pub async fn health() -> Json<SubmitResponse> {
    Json(SubmitResponse::ok("service reachable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_envelope() {
        let Json(response) = health().await;
        assert!(response.success);
        assert_eq!(response.message, "service reachable");
        assert!(response.row_number.is_none());
    }
}
