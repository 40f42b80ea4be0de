//! Enhancement of draft statements by an external language model.
//!
//! The domain only owns the request wording and the reply format; the call
//! itself goes through the application layer's `LlmGateway` port.

pub mod parsing;

use serde::{Deserialize, Serialize};

pub use parsing::{ReplyParseError, parse_enhanced_reply};

/// Rephrased versions of both drafts, in bucket order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedStatements {
    pub first: String,
    pub second: String,
}

impl EnhancedStatements {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}
