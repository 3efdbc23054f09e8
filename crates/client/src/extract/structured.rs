//! JSON-LD `Organization` metadata.
//!
//! Only the first `application/ld+json` script mentioning `"Organization"` is
//! considered. Invalid JSON is logged and ignored.

use scraper::{Html, Selector};
use serde_json::{Map, Value};

const ORGANIZATION_TYPE: &str = "Organization";

/// Attributes read from an `Organization` JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub vat_id: Option<String>,
    pub name: Option<String>,
    pub founding_date: Option<String>,
    pub number_of_employees: Option<String>,
    pub isic_v4: Option<String>,
}

/// Find and parse the page's `Organization` JSON-LD block.
///
/// Returns `None` when no candidate script exists, its content is not valid
/// JSON, it is not an object, or its `@type` is not exactly `Organization`.
pub fn organization_json_ld(document: &Html) -> Option<Organization> {
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).expect("invalid selector");
    let needle = format!("\"{ORGANIZATION_TYPE}\"");

    let content = document
        .select(&selector)
        .map(|script| script.text().collect::<String>())
        .find(|text| text.contains(&needle))?;

    let value: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "error parsing JSON-LD");
            return None;
        }
    };

    let object = value.as_object()?;
    if object.get("@type").and_then(Value::as_str) != Some(ORGANIZATION_TYPE) {
        tracing::debug!("JSON-LD block is not an Organization");
        return None;
    }

    Some(Organization {
        vat_id: text_attr(object, "vatID"),
        name: text_attr(object, "name"),
        founding_date: text_attr(object, "foundingDate"),
        number_of_employees: text_attr(object, "numberOfEmployees"),
        isic_v4: text_attr(object, "isicV4"),
    })
}

/// Read an attribute as text.
///
/// Strings are taken as-is and other scalars are stringified. A
/// `QuantitativeValue`-style object contributes its `value`. Anything else
/// counts as absent.
fn text_attr(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(inner) => match inner.get("value")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
        Value::Null | Value::Array(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_script(content: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><head><script type="application/ld+json">{content}</script></head><body></body></html>"#
        ))
    }

    #[test]
    fn test_organization_full() {
        let doc = doc_with_script(
            r#"{"@context": "https://schema.org", "@type": "Organization", "vatID": "07727071008",
                "name": "ACME S.R.L.", "foundingDate": "2004-03-15", "numberOfEmployees": "5", "isicV4": "62.01"}"#,
        );
        let org = organization_json_ld(&doc).unwrap();
        assert_eq!(org.vat_id.as_deref(), Some("07727071008"));
        assert_eq!(org.name.as_deref(), Some("ACME S.R.L."));
        assert_eq!(org.founding_date.as_deref(), Some("2004-03-15"));
        assert_eq!(org.number_of_employees.as_deref(), Some("5"));
        assert_eq!(org.isic_v4.as_deref(), Some("62.01"));
    }

    #[test]
    fn test_organization_partial() {
        let doc = doc_with_script(r#"{"@type": "Organization", "name": "ACME"}"#);
        let org = organization_json_ld(&doc).unwrap();
        assert_eq!(org.name.as_deref(), Some("ACME"));
        assert_eq!(org.vat_id, None);
        assert_eq!(org.number_of_employees, None);
    }

    #[test]
    fn test_numeric_and_quantitative_values() {
        let doc = doc_with_script(r#"{"@type": "Organization", "numberOfEmployees": 12, "isicV4": 6201}"#);
        let org = organization_json_ld(&doc).unwrap();
        assert_eq!(org.number_of_employees.as_deref(), Some("12"));
        assert_eq!(org.isic_v4.as_deref(), Some("6201"));

        let doc = doc_with_script(
            r#"{"@type": "Organization", "numberOfEmployees": {"@type": "QuantitativeValue", "value": 7}}"#,
        );
        let org = organization_json_ld(&doc).unwrap();
        assert_eq!(org.number_of_employees.as_deref(), Some("7"));
    }

    #[test]
    fn test_null_attribute_is_absent() {
        let doc = doc_with_script(r#"{"@type": "Organization", "name": null}"#);
        assert_eq!(organization_json_ld(&doc).unwrap().name, None);
    }

    #[test]
    fn test_invalid_json_is_skipped() {
        let doc = doc_with_script(r#"{"@type": "Organization", "name": "ACME",,}"#);
        assert_eq!(organization_json_ld(&doc), None);
    }

    #[test]
    fn test_non_object_is_ignored() {
        let doc = doc_with_script(r#"["Organization"]"#);
        assert_eq!(organization_json_ld(&doc), None);

        let doc = doc_with_script(r#"[{"@type": "Organization", "name": "ACME"}]"#);
        assert_eq!(organization_json_ld(&doc), None);
    }

    #[test]
    fn test_other_type_is_ignored() {
        let doc = doc_with_script(r#"{"@type": "LocalBusiness", "parentOrganization": {"@type": "Organization"}}"#);
        assert_eq!(organization_json_ld(&doc), None);
    }

    #[test]
    fn test_first_mentioning_script_is_used() {
        let doc = Html::parse_document(
            r#"<head>
                <script type="application/ld+json">{"@type": "WebSite", "name": "Ufficio Camerale"}</script>
                <script type="application/ld+json">{"@type": "Organization", "name": "ACME"}</script>
                <script type="application/ld+json">{"@type": "Organization", "name": "Other"}</script>
            </head>"#,
        );
        assert_eq!(organization_json_ld(&doc).unwrap().name.as_deref(), Some("ACME"));
    }

    #[test]
    fn test_no_script() {
        let doc = Html::parse_document("<html><body><p>Organization</p></body></html>");
        assert_eq!(organization_json_ld(&doc), None);
    }

    #[test]
    fn test_script_of_other_type_ignored() {
        let doc = Html::parse_document(
            r#"<script type="application/json">{"@type": "Organization", "name": "ACME"}</script>"#,
        );
        assert_eq!(organization_json_ld(&doc), None);
    }
}
