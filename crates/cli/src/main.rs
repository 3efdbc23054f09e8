//! iva-lookup entry point.
//!
//! Looks up one company by VAT number and prints the JSON result on stdout.
//! Logging goes to stderr so the output can be piped.

use anyhow::Result;
use iva_client::GoogleLookup;
use iva_core::AppConfig;
use iva_core::config::validate_vat_number;
use tracing_subscriber::EnvFilter;

const MISSING_CREDENTIALS_MESSAGE: &str = "Error: Missing API credentials in .env file";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env file loaded: {}", e);
    }

    let config = AppConfig::load()?;

    if let Some((code, message)) = startup_failure(&config) {
        eprintln!("{message}");
        std::process::exit(code);
    }

    let vat_number =
        resolve_vat_number(std::env::args().nth(1), std::env::var("IVA_LOOKUP_VAT_NUMBER").ok(), &config);
    validate_vat_number(&vat_number)?;

    tracing::info!(vat_number = %vat_number, "starting company lookup");

    let lookup = GoogleLookup::from_config(&config)?;
    println!("{}", lookup.company_info(&vat_number).await);

    Ok(())
}

/// Exit status and message when the lookup cannot start.
fn startup_failure(config: &AppConfig) -> Option<(i32, &'static str)> {
    let err = config.require_credentials().err()?;
    tracing::error!("{}", err);
    Some((1, MISSING_CREDENTIALS_MESSAGE))
}

/// Command-line argument, then environment, then the configured default.
///
/// Whitespace anywhere in the value is dropped.
fn resolve_vat_number(arg: Option<String>, env: Option<String>, config: &AppConfig) -> String {
    arg.or(env)
        .map(|v| compact(&v))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| compact(&config.vat_number))
}

fn compact(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
