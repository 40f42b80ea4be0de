//! Questionnaire session domain.
//!
//! - [`ValuesSession`]: per-user context holding selections, the Tier 1
//!   choice, bucket supports and any enhanced statements

mod values_session;

pub use values_session::ValuesSession;
