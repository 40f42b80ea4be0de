//! Tier reduction: collapsing raw selections into the Tier 2 list and
//! partitioning it into two Tier 1 buckets.

pub mod entities;
pub mod reducer;

pub use entities::{Bucket, BucketBuild, BucketSide, Tier2Set, TierOneChoice};
pub use reducer::{build_bucket, compute_tier2, validate_tier_one_choice};
