//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use std::sync::LazyLock;

use crate::config::AppConfig;
use regex::Regex;
use thiserror::Error;

static VAT_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(IT)?\d{11}$").expect("valid VAT pattern"));

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

/// Check that a VAT number looks like an Italian partita IVA.
///
/// Whitespace is ignored; the `IT` prefix is optional.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` unless the value is 11 digits.
pub fn validate_vat_number(vat: &str) -> Result<(), ConfigError> {
    let compact: String = vat.chars().filter(|c| !c.is_whitespace()).collect();
    if VAT_NUMBER.is_match(&compact) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field: "vat_number".into(),
            reason: format!("{vat:?} is not an 11-digit VAT number"),
        })
    }
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `fetch_timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` or `site_domain` is empty
    /// - `search_base_url` is not an http(s) URL
    /// - `vat_number` is not an 11-digit VAT number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_ms < 100 {
            return Err(ConfigError::Invalid {
                field: "fetch_timeout_ms".into(),
                reason: "must be at least 100ms".into(),
            });
        }
        if self.fetch_timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "fetch_timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.site_domain.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "site_domain".into(), reason: "must not be empty".into() });
        }

        if !(self.search_base_url.starts_with("https://") || self.search_base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                field: "search_base_url".into(),
                reason: "must be an http or https URL".into(),
            });
        }

        validate_vat_number(&self.vat_number)?;

        if self.site_domain.contains('/') {
            tracing::warn!(
                site_domain = %self.site_domain,
                "site_domain contains a path; the search may match nothing"
            );
        }

        Ok(())
    }
}
