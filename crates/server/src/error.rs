//! Unified error handling for the server.
//!
//! Provides a single error type that maps to HTTP responses.
//!
//! # Design Principles
//!
//! - **Declarative**: Each error variant declares its HTTP status code
//! - **Modular**: Error type is self-contained with IntoResponse impl
//! - **SoC**: Error handling separate from business logic

use std::any::Any;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use types::InvalidCategory;

use crate::upstream::UpstreamError;

/// Client-facing message for any upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch numbers from the third-party server";

/// Client-facing message for unexpected failures.
pub const INTERNAL_FAILURE_MESSAGE: &str = "Internal server error";

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid request data (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream transport or format failure (500).
    #[error("Upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    /// Internal server error (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<InvalidCategory> for AppError {
    fn from(err: InvalidCategory) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field. Upstream and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.into(),
            AppError::Internal(_) => INTERNAL_FAILURE_MESSAGE.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = axum::Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

/// Turn a panic caught by the middleware into a generic 500.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".into());
    tracing::error!(%detail, "request handler panicked");

    AppError::Internal(detail).into_response()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::BadRequest("bad id".into());
        assert_eq!(err.to_string(), "Bad request: bad id");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(InvalidCategory("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(UpstreamError::Status(502)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_details() {
        let err = AppError::from(UpstreamError::Format("`numbers` is not an array".into()));
        assert_eq!(err.public_message(), UPSTREAM_FAILURE_MESSAGE);

        let err = AppError::Internal("index out of bounds".into());
        assert_eq!(err.public_message(), INTERNAL_FAILURE_MESSAGE);
    }

    #[test]
    fn test_bad_request_keeps_message() {
        let err = AppError::from(InvalidCategory("x".into()));
        assert!(err.public_message().starts_with("Invalid number type"));
    }

    #[test]
    fn test_panic_response_is_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
