//! Core types for the number window service.
//!
//! This crate provides the shared data model used by the window engine and
//! the HTTP server: number categories, fetched batches, and window snapshots.

pub mod category;
pub mod snapshot;

pub use category::{CategoryCode, InvalidCategory};
pub use snapshot::WindowSnapshot;

// =============================================================================
// Constants
// =============================================================================

/// Number of values the shared window holds before evicting the oldest.
pub const DEFAULT_WINDOW_CAPACITY: usize = 10;

/// Upper bound on a single upstream fetch, in milliseconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 500;

// =============================================================================
// Aliases
// =============================================================================

/// Integers returned by one upstream call, in arrival order.
pub type NumberBatch = Vec<i64>;

/// Window contents, oldest first.
pub type Window = Vec<i64>;
