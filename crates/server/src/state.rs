//! Shared server state.
//!
//! Holds the upstream client and the process-wide window store.
//!
//! # Design Principles
//!
//! - **Declarative**: State is data, handlers extract what they need
//! - **Modular**: State independent of route logic
//! - **SoC**: The window is owned by `WindowStore`; handlers only merge into it

use std::sync::Arc;

use crate::app::ServiceConfig;
use crate::store::WindowStore;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Shared state for all route handlers.
///
/// Cloned into each handler via Axum's State extractor.
#[derive(Clone)]
pub struct ServerState {
    /// Number generator client (internal connection pooling).
    pub upstream: UpstreamClient,

    /// The single window shared by every caller and category.
    pub window: Arc<WindowStore>,
}

impl ServerState {
    /// Build state from configuration.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self::new(upstream, WindowStore::new(config.window_capacity)))
    }

    pub fn new(upstream: UpstreamClient, window: WindowStore) -> Self {
        Self {
            upstream,
            window: Arc::new(window),
        }
    }
}
