//! Custom Search API request types and validation.

use serde::Serialize;

use crate::google::GoogleError;

/// Largest `num` the Custom Search API accepts.
const MAX_NUM: u8 = 10;

/// Search parameters, without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search query.
    pub q: String,

    /// Number of results to return (1-10).
    pub num: u8,
}

/// Wire form of a request: `q`, `key`, `cx`, `num` query parameters.
#[derive(Debug, Serialize)]
pub(crate) struct ApiParams<'a> {
    pub q: &'a str,
    pub key: &'a str,
    pub cx: &'a str,
    pub num: u8,
}

impl SearchRequest {
    /// Request for a single result.
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into(), num: 1 }
    }

    /// Query for a VAT number, restricted to one registry domain.
    pub fn site_restricted(vat_number: &str, domain: &str) -> Self {
        Self::new(format!("IVA {vat_number} site:{domain}"))
    }

    /// Validate the request parameters.
    pub fn validate(&self) -> Result<(), GoogleError> {
        if self.q.trim().is_empty() {
            return Err(GoogleError::InvalidQuery("query cannot be empty".to_string()));
        }

        if !(1..=MAX_NUM).contains(&self.num) {
            return Err(GoogleError::InvalidCount);
        }

        Ok(())
    }
}
