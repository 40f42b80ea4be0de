//! Domain layer for value-cards
//!
//! This crate contains the core questionnaire logic, entities, and value
//! objects. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tiers
//!
//! - **Tier 2**: every catalog value the user switched on, de-duplicated by
//!   label and sorted
//! - **Tier 1**: exactly two Tier 2 values promoted to primary status
//!
//! ## Buckets and statements
//!
//! Each Tier 1 value owns a bucket of supporting Tier 2 values. A bucket
//! renders to a fixed-format draft statement; an external language model may
//! rephrase both drafts, and everything ends up in an [`ExportDocument`].

pub mod catalog;
pub mod core;
pub mod enhancement;
pub mod export;
pub mod prompt;
pub mod selection;
pub mod session;
pub mod statement;
pub mod tier;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, Category, Source};
pub use core::error::{CatalogError, InvalidSelection};
pub use enhancement::{EnhancedStatements, ReplyParseError, parse_enhanced_reply};
pub use export::{Block, ExportContents, ExportDocument};
pub use prompt::PromptTemplate;
pub use selection::SelectionState;
pub use session::ValuesSession;
pub use statement::{DraftStatement, DraftStatements, compose};
pub use tier::{
    Bucket, BucketBuild, BucketSide, Tier2Set, TierOneChoice, build_bucket, compute_tier2,
    validate_tier_one_choice,
};
