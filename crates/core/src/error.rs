//! Unified error types for iva-lookup.
//!
//! Messages carry a stable code prefix so log lines can be grepped by failure class.

/// Unified error types for the lookup pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// HTTP error response or transport failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Search API call failed.
    #[error("SEARCH_FAILED: {0}")]
    SearchFailed(String),

    /// Search API credentials are not configured.
    #[error("MISSING_CREDENTIALS: {0}")]
    MissingCredentials(String),
}
