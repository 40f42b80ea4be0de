//! Statement composition: one templated sentence per bucket.

use crate::tier::Bucket;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Templated summary of one bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftStatement(String);

impl DraftStatement {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DraftStatement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `"I value {tier one} supported by {supports, comma separated}"`.
///
/// An empty support list keeps the trailing `"supported by "`.
pub fn compose(bucket: &Bucket) -> DraftStatement {
    DraftStatement(format!(
        "I value {} supported by {}",
        bucket.tier_one,
        bucket.supports.join(", ")
    ))
}

/// Both drafts, in bucket order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftStatements {
    pub first: DraftStatement,
    pub second: DraftStatement,
}

impl DraftStatements {
    pub fn compose(first: &Bucket, second: &Bucket) -> Self {
        Self {
            first: compose(first),
            second: compose(second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_supports() {
        let bucket = Bucket::new("Honesty").with_supports(["Growth", "Trust"]);
        assert_eq!(
            compose(&bucket).as_str(),
            "I value Honesty supported by Growth, Trust"
        );
    }

    #[test]
    fn test_compose_without_supports_keeps_tail() {
        let bucket = Bucket::new("Family");
        assert_eq!(compose(&bucket).as_str(), "I value Family supported by ");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let bucket = Bucket::new("Honesty").with_supports(["Growth"]);
        assert_eq!(compose(&bucket), compose(&bucket));
    }
}
