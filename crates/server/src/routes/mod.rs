//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`health`]: Liveness endpoint
//! - [`numbers`]: Sliding-window number average endpoint

pub mod health;
pub mod numbers;
