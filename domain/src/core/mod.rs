//! Core domain concepts shared across all subdomains.
//!
//! - [`error::InvalidSelection`]: rejected user choices (re-prompt, never fatal)
//! - [`error::CatalogError`]: malformed catalog data

pub mod error;
