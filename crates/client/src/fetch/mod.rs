//! Page download for the registry result.
//!
//! One GET per lookup, with a browser-like User-Agent and a fixed timeout.
//! No retries, no redirect tuning beyond reqwest's defaults.

pub mod url;

use async_trait::async_trait;
use iva_core::config::DEFAULT_USER_AGENT;
use iva_core::{AppConfig, Error};
use reqwest::{Client, header};
use std::time::{Duration, Instant};

pub use self::url::{UrlError, parse_page_url};

use crate::lookup::PageSource;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: a desktop browser string)
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { user_agent: DEFAULT_USER_AGENT.to_string(), timeout: Duration::from_secs(10) }
    }
}

impl FetchConfig {
    /// Build from application configuration.
    pub fn from_app(config: &AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.fetch_timeout() }
    }
}

/// HTTP client for registry pages.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Fetch a URL and decode the body as text.
    ///
    /// Any transport failure, timeout, or non-2xx status is an error.
    pub async fn fetch(&self, url_str: &str) -> Result<String, Error> {
        let start = Instant::now();
        let url = parse_page_url(url_str).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| transport_error(&self.config, e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("status {}", status.as_u16())));
        }

        let final_url = response.url().clone();

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&self.config, e))?;

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!("fetched {} -> {} in {}ms ({} bytes)", url, final_url, fetch_ms, body.len());

        Ok(body)
    }
}

fn transport_error(config: &FetchConfig, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::FetchTimeout(format!("no response within {:?}", config.timeout))
    } else {
        Error::HttpError(format!("network error: {}", err))
    }
}

#[async_trait]
impl PageSource for FetchClient {
    async fn get_html(&self, url: &str) -> Option<String> {
        match self.fetch(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(url, error = %e, "error downloading page");
                None
            }
        }
    }
}
