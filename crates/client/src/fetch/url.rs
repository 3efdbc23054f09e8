//! URL parsing for page downloads.

/// Error type for URL parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Parse a search result link into a fetchable URL.
///
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Accept only http and https
///
/// Host case, path and query are left as the search API returned them.
pub fn parse_page_url(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let url = parse_page_url("https://www.ufficiocamerale.it/1234/acme-srl").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.ufficiocamerale.it"));
        assert_eq!(url.path(), "/1234/acme-srl");
    }

    #[test]
    fn test_parse_default_scheme() {
        let url = parse_page_url("www.ufficiocamerale.it/1234").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_trim_whitespace() {
        let url = parse_page_url("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_preserves_query() {
        let url = parse_page_url("https://example.com/p?a=1&b=2").unwrap();
        assert_eq!(url.query(), Some("a=1&b=2"));
    }

    #[test]
    fn test_parse_http_allowed() {
        let url = parse_page_url("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_parse_unsupported_scheme() {
        let result = parse_page_url("file:///etc/passwd");
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_page_url(""), Err(UrlError::Empty)));
        assert!(matches!(parse_page_url("   "), Err(UrlError::Empty)));
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_page_url("https://exa mple.com");
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }
}
