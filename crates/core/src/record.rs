//! Company record data model and the lookup output envelope.
//!
//! A record is built fresh for every lookup, filled from JSON-LD metadata first
//! and from the displayed registry fields second, then serialized once.

use serde::{Deserialize, Serialize};

/// Message returned when the search yields no usable link.
pub const NO_RESULTS_MESSAGE: &str = "No results found on UfficioCamerale.it";

/// Message returned when the registry page cannot be downloaded.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Unable to download the page";

/// Country prefix carried by every displayed Italian VAT number.
pub const VAT_PREFIX: &str = "IT";

/// Registry data for a single company.
///
/// Field order matches the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub vat_number: String,
    pub website_url: String,
    pub company_name: String,
    pub ateco_description: String,
    pub ateco_code: String,
    pub share_capital: String,
    pub employees: String,
    pub company_registration_date: String,
    pub legal_form: String,
}

impl Default for CompanyRecord {
    fn default() -> Self {
        Self {
            vat_number: String::new(),
            website_url: String::new(),
            company_name: String::new(),
            ateco_description: String::new(),
            ateco_code: String::new(),
            share_capital: String::new(),
            employees: default_employees(),
            company_registration_date: String::new(),
            legal_form: String::new(),
        }
    }
}

/// Employee count used when neither source provides one.
pub fn default_employees() -> String {
    "0".into()
}

impl CompanyRecord {
    /// Create an empty record for a page fetched from `url`.
    pub fn for_page(url: &str) -> Self {
        Self { website_url: url.to_string(), ..Default::default() }
    }
}

/// Prefix a displayed VAT number with `IT` unless it already carries it.
pub fn normalize_vat_number(displayed: &str) -> String {
    if displayed.starts_with(VAT_PREFIX) { displayed.to_string() } else { format!("{VAT_PREFIX}{displayed}") }
}

/// Strip the euro sign and non-breaking spaces from a share capital amount.
pub fn normalize_share_capital(displayed: &str) -> String {
    displayed.replace(['€', '\u{a0}'], "").trim().to_string()
}

/// Result of one lookup, serialized as either `{"company": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupOutput {
    Company { company: CompanyRecord },
    Error { error: String },
}

impl LookupOutput {
    pub fn company(record: CompanyRecord) -> Self {
        LookupOutput::Company { company: record }
    }

    pub fn no_results() -> Self {
        LookupOutput::Error { error: NO_RESULTS_MESSAGE.into() }
    }

    pub fn download_failed() -> Self {
        LookupOutput::Error { error: DOWNLOAD_FAILED_MESSAGE.into() }
    }

    /// Returns the record when the lookup succeeded.
    pub fn as_company(&self) -> Option<&CompanyRecord> {
        match self {
            LookupOutput::Company { company } => Some(company),
            LookupOutput::Error { .. } => None,
        }
    }

    /// Render as 2-space indented JSON, keeping non-ASCII characters literal.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
