//! Health check endpoint.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe (always 200 if server is up)

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status, always `"UP"`.
    pub status: &'static str,
}

/// Liveness probe: `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        let Json(response) = health().await;
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"UP"}"#);
    }
}
