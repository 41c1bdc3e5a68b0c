//! Client for the third-party number generator.
//!
//! One GET per request, bounded by the configured timeout. A timeout is not
//! an error: the caller gets an empty batch and carries on. Transport
//! failures, non-2xx replies and malformed bodies are returned as
//! [`UpstreamError`].

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use types::{CategoryCode, DEFAULT_UPSTREAM_TIMEOUT_MS, NumberBatch};

/// Base URL of the evaluation service hosting the generators.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://20.244.56.144/evaluation-service";

/// Largest float magnitude accepted as an exact integer.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Errors surfaced by [`UpstreamClient::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection refused, reset, DNS failure, or similar.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// Body was not `{ "numbers": [<integer>, ...] }`.
    #[error("invalid response format: {0}")]
    Format(String),
}

/// Where the generators live and how long to wait for them.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.into(),
            timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
        }
    }
}

/// Thin HTTP client for the number generators.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    /// Full URL of the generator for `category`.
    pub fn url_for(&self, category: CategoryCode) -> String {
        format!("{}/{}", self.base_url, category.endpoint())
    }

    /// Fetch one batch for `category`.
    ///
    /// Returns an empty batch if the upstream does not answer within the
    /// timeout. No retries.
    pub async fn fetch(&self, category: CategoryCode) -> Result<NumberBatch, UpstreamError> {
        let url = self.url_for(category);

        match tokio::time::timeout(self.timeout, self.request(&url)).await {
            Ok(Ok(numbers)) => {
                debug!(%category, count = numbers.len(), "upstream batch received");
                Ok(numbers)
            }
            Ok(Err(UpstreamError::Transport(err))) if err.is_timeout() => {
                warn!(%category, %url, "upstream request timed out");
                Ok(Vec::new())
            }
            Ok(Err(err)) => Err(err),
            Err(_) => {
                warn!(
                    %category,
                    %url,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "upstream request timed out"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn request(&self, url: &str) -> Result<NumberBatch, UpstreamError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_numbers(&body)
    }
}

/// Decode an upstream body into a batch, rejecting any other shape.
pub fn parse_numbers(body: &[u8]) -> Result<NumberBatch, UpstreamError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| UpstreamError::Format(format!("body is not JSON: {err}")))?;

    let numbers = value
        .get("numbers")
        .ok_or_else(|| UpstreamError::Format("missing `numbers` field".into()))?
        .as_array()
        .ok_or_else(|| UpstreamError::Format("`numbers` is not an array".into()))?;

    numbers
        .iter()
        .map(|v| {
            as_integer(v)
                .ok_or_else(|| UpstreamError::Format(format!("`numbers` holds non-integer {v}")))
        })
        .collect()
}

/// Integers, plus floats with no fractional part (e.g. `4.0`).
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT)
            .map(|f| f as i64)
    })
}
