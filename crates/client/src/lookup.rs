//! Lookup orchestration: search, fetch, extract, format.
//!
//! Each stage runs only after the previous one produced a value. A missing
//! link or page becomes an error record; nothing escapes as an `Err`.

use async_trait::async_trait;
use iva_core::{AppConfig, Error, LookupOutput};

use crate::extract::extract_company;
use crate::fetch::{FetchClient, FetchConfig};
use crate::google::{GoogleClient, GoogleConfig};

/// Finds the registry page for a VAT number.
#[async_trait]
pub trait LinkSearch: Send + Sync {
    /// Link of the first search result, or `None` when there is nothing usable.
    async fn first_link(&self, vat_number: &str) -> Option<String>;
}

/// Downloads page HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Page body, or `None` when the download failed.
    async fn get_html(&self, url: &str) -> Option<String>;
}

/// Company lookup over a search backend and a page source.
pub struct CompanyLookup<S, P> {
    search: S,
    pages: P,
}

/// Lookup backed by the Custom Search API and a reqwest page fetcher.
pub type GoogleLookup = CompanyLookup<GoogleClient, FetchClient>;

impl<S: LinkSearch, P: PageSource> CompanyLookup<S, P> {
    pub fn new(search: S, pages: P) -> Self {
        Self { search, pages }
    }

    /// Run the lookup for one VAT number.
    pub async fn lookup(&self, vat_number: &str) -> LookupOutput {
        let Some(link) = self.search.first_link(vat_number).await else {
            return LookupOutput::no_results();
        };

        tracing::debug!(vat_number, link = %link, "search matched registry page");

        let Some(html) = self.pages.get_html(&link).await else {
            return LookupOutput::download_failed();
        };

        LookupOutput::company(extract_company(&html, &link))
    }

    /// Run the lookup and render it as pretty-printed JSON.
    pub async fn company_info(&self, vat_number: &str) -> String {
        self.lookup(vat_number).await.to_pretty_json()
    }
}

impl GoogleLookup {
    /// Build the production lookup from application configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingCredentials` when the API key or search engine id
    /// is absent, or `Error::HttpError` if an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        config
            .require_credentials()
            .map_err(|e| Error::MissingCredentials(e.to_string()))?;

        let search = GoogleClient::new(GoogleConfig::from_app(config))?;
        let pages = FetchClient::new(FetchConfig::from_app(config))?;

        Ok(Self::new(search, pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedSearch(Option<&'static str>);

    #[async_trait]
    impl LinkSearch for FixedSearch {
        async fn first_link(&self, _vat_number: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[derive(Default)]
    struct RecordingPages {
        html: Option<&'static str>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PageSource for RecordingPages {
        async fn get_html(&self, url: &str) -> Option<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.html.map(str::to_string)
        }
    }

    #[tokio::test]
    async fn test_no_search_result() {
        let lookup = CompanyLookup::new(FixedSearch(None), RecordingPages::default());
        let output = lookup.company_info("07727071008").await;

        assert_eq!(output, "{\n  \"error\": \"No results found on UfficioCamerale.it\"\n}");
        assert!(lookup.pages.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_download_failure() {
        let search = FixedSearch(Some("https://www.ufficiocamerale.it/1"));
        let lookup = CompanyLookup::new(search, RecordingPages::default());
        let output = lookup.company_info("07727071008").await;

        assert_eq!(output, "{\n  \"error\": \"Unable to download the page\"\n}");
        assert_eq!(*lookup.pages.requested.lock().unwrap(), vec!["https://www.ufficiocamerale.it/1".to_string()]);
    }

    #[tokio::test]
    async fn test_success_uses_link_as_website_url() {
        let pages = RecordingPages { html: Some(r#"<span id="field_piva">07727071008</span>"#), ..Default::default() };
        let lookup = CompanyLookup::new(FixedSearch(Some("https://www.ufficiocamerale.it/1")), pages);

        let output = lookup.lookup("07727071008").await;
        let company = output.as_company().unwrap();
        assert_eq!(company.vat_number, "IT07727071008");
        assert_eq!(company.website_url, "https://www.ufficiocamerale.it/1");
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let config = AppConfig::default();
        let result = GoogleLookup::from_config(&config);
        assert!(matches!(result, Err(Error::MissingCredentials(_))));
    }

    #[tokio::test]
    async fn test_from_config_with_credentials() {
        let config =
            AppConfig { google_api_key: Some("key".into()), google_cse_id: Some("cx".into()), ..Default::default() };
        assert!(GoogleLookup::from_config(&config).is_ok());
    }
}
