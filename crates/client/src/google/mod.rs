//! Custom Search JSON API client.
//!
//! Issues a single site-restricted query and reports the first result link.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://www.googleapis.com/customsearch/v1`
//! - **Authentication**: `key` (API key) and `cx` (search engine id) query parameters.
//! - **Parameters**: `q`, `key`, `cx`, `num=1`.
//! - **Timeout**: none by default; the transport default applies.
//! - **Result**: `items[0].link`; any other shape counts as no result.

pub mod error;
pub mod request;
pub mod response;

pub use error::GoogleError;
pub use request::SearchRequest;
pub use response::{SearchItem, SearchResponse};

use async_trait::async_trait;
use iva_core::AppConfig;
use iva_core::config::{DEFAULT_SEARCH_BASE_URL, DEFAULT_SITE_DOMAIN, DEFAULT_USER_AGENT};
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::lookup::LinkSearch;
use request::ApiParams;

/// Custom Search client configuration.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// API key from GOOGLE_API_KEY.
    pub api_key: String,
    /// Search engine id from GOOGLE_CSE_ID.
    pub cse_id: String,
    /// Endpoint (default: https://www.googleapis.com/customsearch/v1).
    pub base_url: String,
    /// Domain every lookup query is restricted to.
    pub site_domain: String,
    /// User-agent string.
    pub user_agent: String,
    /// Request timeout (default: none).
    pub timeout: Option<Duration>,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cse_id: String::new(),
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            site_domain: DEFAULT_SITE_DOMAIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl GoogleConfig {
    /// Build from application configuration.
    ///
    /// Credentials are copied as-is; [`GoogleClient::new`] rejects empty ones.
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            api_key: config.google_api_key.clone().unwrap_or_default(),
            cse_id: config.google_cse_id.clone().unwrap_or_default(),
            base_url: config.search_base_url.clone(),
            site_domain: config.site_domain.clone(),
            user_agent: config.user_agent.clone(),
            timeout: None,
        }
    }
}

/// Custom Search API client.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: reqwest::Client,
    config: Arc<GoogleConfig>,
}

impl GoogleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        if config.api_key.trim().is_empty() {
            return Err(GoogleError::MissingCredentials("GOOGLE_API_KEY"));
        }
        if config.cse_id.trim().is_empty() {
            return Err(GoogleError::MissingCredentials("GOOGLE_CSE_ID"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| GoogleError::Network(Arc::new(e)))?;

        Ok(Self { http, config: Arc::new(config) })
    }

    /// Build the HTTP request for a search without sending it.
    pub fn build_request(&self, req: &SearchRequest) -> Result<reqwest::Request, GoogleError> {
        req.validate()?;

        let params = ApiParams { q: &req.q, key: &self.config.api_key, cx: &self.config.cse_id, num: req.num };

        self.http
            .get(&self.config.base_url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(header::ACCEPT, "application/json")
            .query(&params)
            .build()
            .map_err(GoogleError::from)
    }

    /// Execute a search query.
    pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse, GoogleError> {
        let request = self.build_request(&req)?;
        let start = Instant::now();

        tracing::debug!("searching Custom Search API: query={}", req.q);

        let http_response = self.http.execute(request).await?;

        let status = http_response.status();
        tracing::debug!("Custom Search API response status: {}", status);

        if !status.is_success() {
            return Err(GoogleError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let response: SearchResponse =
            serde_json::from_slice(&bytes).map_err(|e| GoogleError::Parse(e.to_string()))?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), response.items.len());

        Ok(response)
    }
}

#[async_trait]
impl LinkSearch for GoogleClient {
    async fn first_link(&self, vat_number: &str) -> Option<String> {
        let req = SearchRequest::site_restricted(vat_number, &self.config.site_domain);

        match self.search(req).await {
            Ok(response) => {
                let link = response.first_link().map(str::to_string);
                if link.is_none() {
                    tracing::info!(vat_number, "no search results");
                }
                link
            }
            Err(e) => {
                tracing::warn!(vat_number, error = %e, "error in Custom Search request");
                None
            }
        }
    }
}
