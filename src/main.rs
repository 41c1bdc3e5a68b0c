//! Number Window - Main binary
//!
//! Serves the sliding-window number average over HTTP.
//!
//! # Architecture
//!
//! ```text
//! dashboard ── GET /numbers/{id} ──► number-window ── GET /{endpoint} ──► generators
//!           ◄── window + average ──  (axum, tokio) ◄── { numbers: [] } ──
//! ```
//!
//! Every flag can also be set through the environment variable named in its
//! help text. Log verbosity follows `RUST_LOG` (default `info`).

use std::time::Duration;

use clap::Parser;
use server::{ServerState, ServiceConfig, UpstreamConfig, create_app};
use tokio::net::TcpListener;
use tracing::info;
use types::{DEFAULT_UPSTREAM_TIMEOUT_MS, DEFAULT_WINDOW_CAPACITY};

/// Number Window - sliding-window average over third-party number generators
#[derive(Parser, Debug)]
#[command(name = "number-window")]
#[command(about = "Sliding-window number average microservice")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = server::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Base URL of the number generator service
    #[arg(
        long,
        env = "UPSTREAM_BASE_URL",
        default_value = server::upstream::DEFAULT_UPSTREAM_BASE_URL
    )]
    upstream_url: String,

    /// Upstream timeout in milliseconds; slower replies count as an empty batch
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_MS)]
    upstream_timeout_ms: u64,

    /// Number of values kept in the window
    #[arg(
        long,
        env = "WINDOW_CAPACITY",
        default_value_t = DEFAULT_WINDOW_CAPACITY,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    window_capacity: usize,
}

impl Args {
    fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            host: self.host,
            port: self.port,
            window_capacity: self.window_capacity,
            upstream: UpstreamConfig {
                base_url: self.upstream_url,
                timeout: Duration::from_millis(self.upstream_timeout_ms),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    let state = ServerState::from_config(&config)?;
    let app = create_app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        %addr,
        upstream = %config.upstream.base_url,
        timeout_ms = config.upstream.timeout.as_millis() as u64,
        capacity = config.window_capacity,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Args::try_parse_from(["number-window"]).unwrap().into_config();
        assert_eq!(config.port, 9876);
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.upstream.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Args::try_parse_from([
            "number-window",
            "--port",
            "8080",
            "--upstream-url",
            "http://localhost:3000",
            "--upstream-timeout-ms",
            "250",
            "--window-capacity",
            "5",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "http://localhost:3000");
        assert_eq!(config.upstream.timeout, Duration::from_millis(250));
        assert_eq!(config.window_capacity, 5);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(Args::try_parse_from(["number-window", "--window-capacity", "0"]).is_err());
    }
}
