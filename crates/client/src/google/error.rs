//! Custom Search API client error types.

use std::sync::Arc;

/// Errors from the Custom Search API client.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// API key or search engine id not configured.
    #[error("missing credentials: {0} not set")]
    MissingCredentials(&'static str),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid num parameter (must be 1-10).
    #[error("invalid num: must be 1-10")]
    InvalidCount,

    /// Request rejected by the API (bad key, quota exhausted, ...).
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { GoogleError::Timeout } else { GoogleError::Network(Arc::new(err)) }
    }
}

impl From<GoogleError> for iva_core::Error {
    fn from(err: GoogleError) -> Self {
        match err {
            GoogleError::MissingCredentials(_) => iva_core::Error::MissingCredentials(err.to_string()),
            _ => iva_core::Error::SearchFailed(err.to_string()),
        }
    }
}
