//! Company record extraction from a registry page.
//!
//! ### Passes
//! 1. `<link rel="canonical">` replaces the fetched URL as `website_url`.
//! 2. JSON-LD `Organization` metadata fills vat number, name, founding date,
//!    employees and ATECO code.
//! 3. Displayed fields, located by element id, override the metadata whenever
//!    they are non-empty. ATECO description, share capital and legal form come
//!    only from displayed fields.
//!
//! ### Normalization
//! - A displayed VAT number is prefixed with `IT` unless already prefixed.
//! - Share capital loses `€` and non-breaking spaces.

pub mod fields;
pub mod structured;

pub use fields::{DisplayedFields, canonical_url, field_text};
pub use structured::{Organization, organization_json_ld};

use iva_core::CompanyRecord;
use iva_core::record::{default_employees, normalize_share_capital, normalize_vat_number};
use scraper::Html;

/// Extract a company record from registry page HTML fetched from `url`.
pub fn extract_company(html: &str, url: &str) -> CompanyRecord {
    let document = Html::parse_document(html);
    let mut record = CompanyRecord::for_page(url);

    if let Some(canonical) = canonical_url(&document) {
        record.website_url = canonical;
    }

    if let Some(org) = organization_json_ld(&document) {
        apply_organization(&mut record, org);
    }

    apply_displayed(&mut record, DisplayedFields::read(&document));

    record
}

/// Fill the record from JSON-LD; absent attributes reset to their defaults.
fn apply_organization(record: &mut CompanyRecord, org: Organization) {
    record.vat_number = org.vat_id.unwrap_or_default();
    record.company_name = org.name.unwrap_or_default();
    record.company_registration_date = org.founding_date.unwrap_or_default();
    record.employees = org.number_of_employees.unwrap_or_else(default_employees);
    record.ateco_code = org.isic_v4.unwrap_or_default();
}

fn apply_displayed(record: &mut CompanyRecord, fields: DisplayedFields) {
    if !fields.vat_number.is_empty() {
        record.vat_number = normalize_vat_number(&fields.vat_number);
    }

    override_if_present(&mut record.company_name, fields.company_name);
    override_if_present(&mut record.ateco_code, fields.ateco_code);
    override_if_present(&mut record.employees, fields.employees);
    override_if_present(&mut record.company_registration_date, fields.registration_date);

    record.ateco_description = fields.ateco_description;
    record.legal_form = fields.legal_form;
    record.share_capital = normalize_share_capital(&fields.share_capital);
}

fn override_if_present(slot: &mut String, displayed: String) {
    if !displayed.is_empty() {
        *slot = displayed;
    }
}
