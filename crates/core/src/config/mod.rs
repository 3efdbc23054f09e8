//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (`GOOGLE_API_KEY`, `GOOGLE_CSE_ID`, `IVA_LOOKUP_*`)
//! 2. TOML config file (if IVA_LOOKUP_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::{ConfigError, validate_vat_number};

/// Custom Search JSON API endpoint.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Registry site the search is restricted to.
pub const DEFAULT_SITE_DOMAIN: &str = "ufficiocamerale.it";

/// Browser-like identification sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Config keys and the environment variables their credentials are read from.
const CREDENTIAL_VARS: [(&str, &str); 2] = [("google_api_key", "GOOGLE_API_KEY"), ("google_cse_id", "GOOGLE_CSE_ID")];

/// VAT number looked up when none is given on the command line.
pub const DEFAULT_VAT_NUMBER: &str = "07727071008";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables
/// 2. TOML config file (if IVA_LOOKUP_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Custom Search API key.
    ///
    /// Set via GOOGLE_API_KEY environment variable.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Programmable search engine identifier (`cx`).
    ///
    /// Set via GOOGLE_CSE_ID environment variable.
    #[serde(default)]
    pub google_cse_id: Option<String>,

    /// Search endpoint.
    ///
    /// Set via IVA_LOOKUP_SEARCH_BASE_URL environment variable.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Domain the search query is restricted to with `site:`.
    ///
    /// Set via IVA_LOOKUP_SITE_DOMAIN environment variable.
    #[serde(default = "default_site_domain")]
    pub site_domain: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via IVA_LOOKUP_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page download timeout in milliseconds.
    ///
    /// Set via IVA_LOOKUP_FETCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// VAT number to look up when the command line gives none.
    ///
    /// Only read from the TOML file, so leading zeros survive.
    #[serde(default = "default_vat_number")]
    pub vat_number: String,
}

fn default_search_base_url() -> String {
    DEFAULT_SEARCH_BASE_URL.into()
}

fn default_site_domain() -> String {
    DEFAULT_SITE_DOMAIN.into()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_fetch_timeout_ms() -> u64 {
    10_000
}

fn default_vat_number() -> String {
    DEFAULT_VAT_NUMBER.into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cse_id: None,
            search_base_url: default_search_base_url(),
            site_domain: default_site_domain(),
            user_agent: default_user_agent(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            vat_number: default_vat_number(),
        }
    }
}

impl AppConfig {
    /// Page fetch timeout as Duration for use with reqwest.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `IVA_LOOKUP_`
    /// 2. `GOOGLE_API_KEY` and `GOOGLE_CSE_ID`, taken verbatim as text
    /// 3. TOML file from `IVA_LOOKUP_CONFIG_FILE` (if set)
    /// 4. Built-in defaults via `Default::default()`
    ///
    /// Missing credentials are not an error here; see [`AppConfig::require_credentials`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("IVA_LOOKUP_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        // Credentials are opaque text; Env would parse all-digit values as integers.
        for (key, var) in CREDENTIAL_VARS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        figment = figment.merge(
            Env::prefixed("IVA_LOOKUP_").ignore(&["CONFIG_FILE", "VAT_NUMBER", "GOOGLE_API_KEY", "GOOGLE_CSE_ID"]),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Both search credentials, or the first one that is missing.
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the absent credential.
    pub fn require_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let key = non_empty(&self.google_api_key).ok_or_else(|| ConfigError::Missing {
            field: "google_api_key".into(),
            hint: "Set GOOGLE_API_KEY in the environment or .env file".into(),
        })?;
        let cx = non_empty(&self.google_cse_id).ok_or_else(|| ConfigError::Missing {
            field: "google_cse_id".into(),
            hint: "Set GOOGLE_CSE_ID in the environment or .env file".into(),
        })?;
        Ok((key, cx))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
