//! Client code for iva-lookup.
//!
//! This crate provides the search client, the page fetcher, company record
//! extraction, and the lookup pipeline that ties them together.

pub mod extract;
pub mod fetch;
pub mod google;
pub mod lookup;

#[cfg(test)]
mod test_support;

pub use extract::{DisplayedFields, Organization, extract_company};
pub use fetch::{FetchClient, FetchConfig};
pub use google::{GoogleClient, GoogleConfig, GoogleError, SearchRequest, SearchResponse};
pub use lookup::{CompanyLookup, GoogleLookup, LinkSearch, PageSource};
