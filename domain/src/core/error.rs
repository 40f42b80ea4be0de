//! Domain error types

use thiserror::Error;

/// A user choice that cannot be applied.
///
/// These are reported back to whoever made the choice so they can pick
/// again. None of them ends a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("Expected exactly {expected} values, got {actual}")]
    WrongCardinality { expected: usize, actual: usize },

    #[error("\"{0}\" is not in your Tier 2 values")]
    NotInTier2(String),

    #[error("\"{0}\" was chosen twice")]
    DuplicateChoice(String),

    #[error("Unknown value: {0}")]
    UnknownValue(String),

    #[error("\"{label}\" appears in several categories ({}); name the category too", .categories.join(", "))]
    AmbiguousValue {
        label: String,
        categories: Vec<String>,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("\"{0}\" is already the other Tier 1 value")]
    TierOneConflict(String),

    #[error("Choose your two Tier 1 values first")]
    NoTierOneChoice,
}

/// Errors raised while constructing a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category label cannot be empty")]
    EmptyCategoryLabel,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate value \"{item}\" in category {category}")]
    DuplicateItem { category: String, item: String },
}
