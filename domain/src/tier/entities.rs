//! Tier value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sorted, duplicate-free list of selected value labels.
///
/// Label text is the identity: the same word picked under two categories
/// appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier2Set(Vec<String>);

impl Tier2Set {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();
        Self(labels)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.binary_search_by(|l| l.as_str().cmp(label)).is_ok()
    }

    /// The stored spelling of `label`, matching exactly first and then
    /// ignoring ASCII case.
    pub fn canonical(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        if self.contains(wanted) {
            return self.0.iter().find(|l| *l == wanted).map(String::as_str);
        }
        self.0
            .iter()
            .find(|l| l.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// Labels still available as supports once the Tier 1 pair is removed
    pub fn support_options(&self, choice: &TierOneChoice) -> Vec<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|l| !choice.contains(l))
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which of the two buckets an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSide {
    First,
    Second,
}

impl BucketSide {
    pub fn other(self) -> Self {
        match self {
            BucketSide::First => BucketSide::Second,
            BucketSide::Second => BucketSide::First,
        }
    }

    /// 1 or 2, as shown to the user
    pub fn number(self) -> u8 {
        match self {
            BucketSide::First => 1,
            BucketSide::Second => 2,
        }
    }
}

impl fmt::Display for BucketSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for BucketSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "first" | "a" | "left" => Ok(BucketSide::First),
            "2" | "second" | "b" | "right" => Ok(BucketSide::Second),
            other => Err(format!("Unknown bucket: {other} (use 1 or 2)")),
        }
    }
}

/// The two dominant values, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierOneChoice {
    first: String,
    second: String,
}

impl TierOneChoice {
    pub(crate) fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn get(&self, side: BucketSide) -> &str {
        match side {
            BucketSide::First => &self.first,
            BucketSide::Second => &self.second,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.first == label || self.second == label
    }
}

/// A Tier 1 value and the Tier 2 values chosen to support it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub tier_one: String,
    pub supports: Vec<String>,
}

impl Bucket {
    pub fn new(tier_one: impl Into<String>) -> Self {
        Self {
            tier_one: tier_one.into(),
            supports: Vec::new(),
        }
    }

    pub fn with_supports<I, S>(mut self, supports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supports = supports.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of [`build_bucket`](super::reducer::build_bucket): the bucket plus
/// any candidates that were filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketBuild {
    pub bucket: Bucket,
    pub dropped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_sorts_and_dedups() {
        let set = Tier2Set::from_labels(["Honesty", "Family", "Honesty", "Growth"]);
        assert_eq!(set.as_slice(), &["Family", "Growth", "Honesty"]);
    }

    #[test]
    fn test_canonical_ignores_case() {
        let set = Tier2Set::from_labels(["Job Security"]);
        assert_eq!(set.canonical("job security"), Some("Job Security"));
        assert_eq!(set.canonical(" Job Security "), Some("Job Security"));
        assert_eq!(set.canonical("Security"), None);
    }

    #[test]
    fn test_support_options_exclude_tier_one() {
        let set = Tier2Set::from_labels(["Family", "Growth", "Honesty", "Trust"]);
        let choice = TierOneChoice::new("Honesty", "Family");
        assert_eq!(set.support_options(&choice), vec!["Growth", "Trust"]);
    }

    #[test]
    fn test_bucket_side_parse() {
        assert_eq!("1".parse::<BucketSide>(), Ok(BucketSide::First));
        assert_eq!("Second".parse::<BucketSide>(), Ok(BucketSide::Second));
        assert!("3".parse::<BucketSide>().is_err());
        assert_eq!(BucketSide::First.other(), BucketSide::Second);
    }
}
