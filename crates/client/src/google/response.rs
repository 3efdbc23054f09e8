//! Custom Search API response types.

use serde::Deserialize;

/// Subset of the Custom Search API response that the lookup reads.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// Individual search result.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub link: Option<String>,
}

impl SearchResponse {
    /// Link of the first result, if it has a non-empty one.
    pub fn first_link(&self) -> Option<&str> {
        self.items
            .first()
            .and_then(|item| item.link.as_deref())
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}
