//! Window engine for the number window service.
//!
//! This crate holds the pure, synchronous parts of the service: the
//! fixed-capacity FIFO window with its dedup-and-evict merge, and the
//! average reported alongside it.
//!
//! # Modules
//!
//! - [`sliding`] - Fixed-capacity window of unique values
//! - [`stats`] - Average computation and two-decimal formatting
//!
//! # Design Notes
//!
//! - Nothing here locks; the server serializes access to the shared window
//! - Merges return owned snapshots, never references into the window

pub mod sliding;
pub mod stats;

pub use sliding::SlidingWindow;
pub use stats::{average, format_average};
