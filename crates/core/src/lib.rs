//! Core types and shared functionality for iva-lookup.
//!
//! This crate provides:
//! - The company record data model and lookup output envelope
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod record;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use record::{CompanyRecord, LookupOutput};
