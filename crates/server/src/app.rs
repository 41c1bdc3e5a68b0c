//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.
//!
//! # Design Principles
//!
//! - **Declarative**: Routes declared via Axum's type-safe Router
//! - **Modular**: App builder separate from handlers
//! - **SoC**: Configuration here, logic in route modules
//!
//! # Routes
//!
//! - `GET /numbers/{numberid}` - Merge a fresh batch and report the window
//! - `GET /health` - Liveness probe

use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use types::DEFAULT_WINDOW_CAPACITY;

use crate::error::panic_response;
use crate::routes::{health, numbers};
use crate::state::ServerState;
use crate::upstream::UpstreamConfig;

/// Port the service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 9876;

/// Create the Axum application with all routes.
pub fn create_app(state: ServerState) -> Router {
    // Dashboard frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/numbers/{numberid}", get(numbers::get_numbers))
        .route("/health", get(health::health))
        // Middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum number of values kept in the window.
    pub window_capacity: usize,
    /// Number generator location and timeout.
    pub upstream: UpstreamConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 9876);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.upstream.timeout, Duration::from_millis(500));
        assert_eq!(config.bind_addr(), "0.0.0.0:9876");
    }

    #[test]
    fn test_create_app() {
        let state = ServerState::from_config(&ServiceConfig::default()).unwrap();
        let _app = create_app(state);
    }
}
