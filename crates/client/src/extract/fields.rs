//! Displayed registry fields, located by element id.

use scraper::{Html, Selector};

pub const FIELD_VAT_NUMBER: &str = "field_piva";
pub const FIELD_COMPANY_NAME: &str = "field_denominazione";
pub const FIELD_ATECO_DESCRIPTION: &str = "field_desc_ateco";
pub const FIELD_ATECO_CODE: &str = "field_ateco";
pub const FIELD_SHARE_CAPITAL: &str = "field_capitale_sociale";
pub const FIELD_EMPLOYEES: &str = "field_addetti";
pub const FIELD_REGISTRATION_DATE: &str = "field_data";
pub const FIELD_LEGAL_FORM: &str = "field_formagiuridica";

/// Raw text of every displayed field; empty when the element is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayedFields {
    pub vat_number: String,
    pub company_name: String,
    pub ateco_description: String,
    pub ateco_code: String,
    pub share_capital: String,
    pub employees: String,
    pub registration_date: String,
    pub legal_form: String,
}

impl DisplayedFields {
    pub fn read(document: &Html) -> Self {
        Self {
            vat_number: field_text(document, FIELD_VAT_NUMBER),
            company_name: field_text(document, FIELD_COMPANY_NAME),
            ateco_description: field_text(document, FIELD_ATECO_DESCRIPTION),
            ateco_code: field_text(document, FIELD_ATECO_CODE),
            share_capital: field_text(document, FIELD_SHARE_CAPITAL),
            employees: field_text(document, FIELD_EMPLOYEES),
            registration_date: field_text(document, FIELD_REGISTRATION_DATE),
            legal_form: field_text(document, FIELD_LEGAL_FORM),
        }
    }
}

/// Visible text of the first element with the given id.
///
/// Each descendant text node is trimmed and the non-empty pieces are joined
/// without a separator.
pub fn field_text(document: &Html, id: &str) -> String {
    let Ok(selector) = Selector::parse(&format!(r#"[id="{id}"]"#)) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().map(str::trim).filter(|t| !t.is_empty()).collect())
        .unwrap_or_default()
}

/// `href` of the first `<link rel="canonical">`, when non-empty.
pub fn canonical_url(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"link[rel~="canonical"]"#).expect("invalid selector");

    document
        .select(&selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}
