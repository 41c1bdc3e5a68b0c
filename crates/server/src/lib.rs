//! Server crate: Axum-based HTTP service for the sliding-window number average.
//!
//! Each request fetches a batch of numbers of one category from the
//! third-party generator, merges the unseen values into a single
//! process-wide FIFO window, and reports the window before and after the
//! merge together with its average.
//!
//! # Architecture
//!
//! ```text
//! GET /numbers/{id}
//!   ──> validate ──────────────> 400 on unknown code
//!   ──> UpstreamClient::fetch    (≤ timeout, no lock held)
//!   ──> WindowStore::merge_unique (serialized, in-memory only)
//!   ──> JSON
//! ```
//!
//! # Modules
//!
//! - [`app`]: Axum application builder, router setup, service configuration
//! - [`state`]: Shared server state (upstream client, window store)
//! - [`store`]: The process-wide window behind a mutex
//! - [`upstream`]: HTTP client for the number generators
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, numbers)

pub mod app;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod upstream;

// Re-exports for convenience
pub use app::{DEFAULT_PORT, ServiceConfig, create_app};
pub use error::{AppError, AppResult};
pub use routes::numbers::NumbersResponse;
pub use state::ServerState;
pub use store::WindowStore;
pub use upstream::{UpstreamClient, UpstreamConfig, UpstreamError};
