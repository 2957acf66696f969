//! Error types for the REST client core.
//!
//! # Design
//! `TransportError` covers everything below HTTP semantics: DNS, connect,
//! TLS, timeouts and malformed URLs. A response with a 4xx/5xx status is not
//! an error at this layer. The dispatcher either returns `TransportError` as
//! a typed result or folds it into an `HttpResponse` for callers that want a
//! single return shape.

use thiserror::Error;

/// Failure to complete an HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Raised by the HTTP library while building, sending or reading.
    #[error("{0}")]
    Http(#[from] ureq::Error),

    /// Any other failure, e.g. from a custom `Transport`.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TransportError::Other(err.into())
    }

    /// Short label for the error category, used in diagnostic bodies.
    pub fn marker(&self) -> &'static str {
        match self {
            TransportError::Http(_) => "HTTP transport error",
            TransportError::Other(_) => "unexpected error",
        }
    }
}

/// Errors interpreting a received response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Errors loading a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
