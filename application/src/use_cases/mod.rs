//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod enhance_statements;
pub mod export_document;
pub mod select_values;
