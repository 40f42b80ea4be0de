//! Selection use cases.
//!
//! Thin wrappers over [`ValuesSession`] that add the logging the pure domain
//! functions leave out, most importantly a record of support candidates that
//! were silently dropped.

use tracing::{debug, info, warn};
use valuecards_domain::{
    Bucket, BucketSide, CatalogEntry, InvalidSelection, TierOneChoice, ValuesSession,
};

/// Toggle one value by label (optionally naming its category)
pub fn toggle_value(
    session: &mut ValuesSession,
    label: &str,
    category: Option<&str>,
) -> Result<(CatalogEntry, bool), InvalidSelection> {
    let (entry, selected) = session.toggle(label, category).inspect_err(|e| {
        debug!("Toggle of {:?} rejected: {}", label, e);
    })?;
    debug!(
        "{} / {} -> {}",
        entry.category,
        entry.value,
        if selected { "on" } else { "off" }
    );
    Ok((entry, selected))
}

/// Promote two Tier 2 values to Tier 1
pub fn choose_tier_one<S: AsRef<str>>(
    session: &mut ValuesSession,
    candidates: &[S],
) -> Result<TierOneChoice, InvalidSelection> {
    let choice = session.choose_tier_one(candidates).inspect_err(|e| {
        debug!("Tier 1 choice rejected: {}", e);
    })?;
    info!("Tier 1 values: {} | {}", choice.first(), choice.second());
    Ok(choice)
}

/// Assign supports to one bucket, logging every dropped candidate
pub fn assign_supports<S: AsRef<str>>(
    session: &mut ValuesSession,
    side: BucketSide,
    candidates: &[S],
) -> Result<Bucket, InvalidSelection> {
    let build = session.assign_supports(side, candidates).inspect_err(|e| {
        debug!("Support assignment for bucket {} rejected: {}", side, e);
    })?;

    for dropped in &build.dropped {
        warn!(
            "Dropped support {:?} from bucket {} ({}): not an eligible Tier 2 value",
            dropped, side, build.bucket.tier_one
        );
    }
    info!(
        "Bucket {} ({}) has {} supports",
        side,
        build.bucket.tier_one,
        build.bucket.supports.len()
    );

    Ok(build.bucket)
}
