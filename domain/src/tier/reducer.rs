//! Pure functions from selection state to tiers and buckets

use super::entities::{Bucket, BucketBuild, Tier2Set, TierOneChoice};
use crate::core::error::InvalidSelection;
use crate::selection::SelectionState;

/// Collapse the selection into the sorted, de-duplicated Tier 2 list.
pub fn compute_tier2(selection: &SelectionState) -> Tier2Set {
    Tier2Set::from_labels(selection.selected().map(|entry| entry.value.as_str()))
}

/// Check that `candidates` names exactly two distinct Tier 2 values.
///
/// Labels are matched through [`Tier2Set::canonical`], so the returned
/// choice always carries the Tier 2 spelling.
pub fn validate_tier_one_choice<S: AsRef<str>>(
    candidates: &[S],
    tier2: &Tier2Set,
) -> Result<TierOneChoice, InvalidSelection> {
    if candidates.len() != 2 {
        return Err(InvalidSelection::WrongCardinality {
            expected: 2,
            actual: candidates.len(),
        });
    }

    let first = canonical_in(tier2, candidates[0].as_ref())?;
    let second = canonical_in(tier2, candidates[1].as_ref())?;
    if first == second {
        return Err(InvalidSelection::DuplicateChoice(first.to_string()));
    }

    Ok(TierOneChoice::new(first, second))
}

/// Build one bucket from caller-supplied support candidates.
///
/// Candidates outside Tier 2, equal to either Tier 1 value, or repeated are
/// dropped rather than rejected; they come back in [`BucketBuild::dropped`].
/// Surviving supports keep the caller's order.
pub fn build_bucket<S: AsRef<str>>(
    tier_one: &str,
    candidates: &[S],
    tier2: &Tier2Set,
    other_tier_one: &str,
) -> Result<BucketBuild, InvalidSelection> {
    let tier_one = canonical_in(tier2, tier_one)?;
    let other = tier2.canonical(other_tier_one).unwrap_or(other_tier_one.trim());
    if tier_one == other {
        return Err(InvalidSelection::TierOneConflict(tier_one.to_string()));
    }

    let mut supports: Vec<String> = Vec::new();
    let mut dropped = Vec::new();

    for candidate in candidates {
        let raw = candidate.as_ref().trim();
        match tier2.canonical(raw) {
            Some(label)
                if label != tier_one && label != other && !supports.iter().any(|s| s == label) =>
            {
                supports.push(label.to_string());
            }
            _ => dropped.push(raw.to_string()),
        }
    }

    Ok(BucketBuild {
        bucket: Bucket::new(tier_one).with_supports(supports),
        dropped,
    })
}

fn canonical_in<'a>(tier2: &'a Tier2Set, label: &str) -> Result<&'a str, InvalidSelection> {
    tier2
        .canonical(label)
        .ok_or_else(|| InvalidSelection::NotInTier2(label.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const LABELS: [&str; 8] = [
        "Achievement", "Family", "Growth", "Honesty", "Trust", "Wealth", "honesty", "Zeal",
    ];
    const CATEGORIES: [&str; 3] = ["A", "B", "C"];

    fn selection(entries: &[(&str, &str)]) -> SelectionState {
        let mut state = SelectionState::new();
        for (category, value) in entries {
            state.toggle(CatalogEntry::new(*category, *value));
        }
        state
    }

    fn tier2() -> Tier2Set {
        Tier2Set::from_labels(["Family", "Growth", "Honesty", "Trust"])
    }

    #[test]
    fn test_compute_tier2_empty() {
        assert!(compute_tier2(&SelectionState::new()).is_empty());
    }

    #[test]
    fn test_compute_tier2_sorted_and_unique() {
        let state = selection(&[
            ("B", "Trust"),
            ("A", "Honesty"),
            ("C", "Trust"),
            ("A", "Achievement"),
            ("D", "Zeal"),
        ]);
        let tier2 = compute_tier2(&state);
        assert_eq!(tier2.as_slice(), &["Achievement", "Honesty", "Trust", "Zeal"]);

        let labels = tier2.as_slice();
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_compute_tier2_round_trip_toggle() {
        let mut state = selection(&[("A", "Honesty")]);
        let before = compute_tier2(&state);
        state.toggle(CatalogEntry::new("B", "Family"));
        state.toggle(CatalogEntry::new("B", "Family"));
        assert_eq!(compute_tier2(&state), before);
    }

    #[test]
    fn test_validate_accepts_two_distinct_members() {
        let choice = validate_tier_one_choice(&["Honesty", "family"], &tier2()).unwrap();
        assert_eq!(choice.first(), "Honesty");
        assert_eq!(choice.second(), "Family");
    }

    #[test]
    fn test_validate_rejects_wrong_cardinality() {
        let empty: [&str; 0] = [];
        assert_eq!(
            validate_tier_one_choice(&empty, &tier2()),
            Err(InvalidSelection::WrongCardinality {
                expected: 2,
                actual: 0
            })
        );
        assert!(matches!(
            validate_tier_one_choice(&["Honesty", "Family", "Growth"], &tier2()),
            Err(InvalidSelection::WrongCardinality { actual: 3, .. })
        ));
        assert!(matches!(
            validate_tier_one_choice(&["Honesty"], &tier2()),
            Err(InvalidSelection::WrongCardinality { actual: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_absent_member() {
        assert_eq!(
            validate_tier_one_choice(&["Honesty", "Wealth"], &tier2()),
            Err(InvalidSelection::NotInTier2("Wealth".into()))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        assert_eq!(
            validate_tier_one_choice(&["Honesty", "HONESTY"], &tier2()),
            Err(InvalidSelection::DuplicateChoice("Honesty".into()))
        );
    }

    #[test]
    fn test_build_bucket_drops_tier_one_labels() {
        let build =
            build_bucket("Honesty", &["Family", "Growth", "Honesty"], &tier2(), "Family").unwrap();
        assert_eq!(build.bucket.tier_one, "Honesty");
        assert_eq!(build.bucket.supports, vec!["Growth"]);
        assert_eq!(build.dropped, vec!["Family", "Honesty"]);
    }

    #[test]
    fn test_build_bucket_preserves_caller_order() {
        let build = build_bucket("Honesty", &["Trust", "Growth"], &tier2(), "Family").unwrap();
        assert_eq!(build.bucket.supports, vec!["Trust", "Growth"]);
        assert!(build.dropped.is_empty());
    }

    #[test]
    fn test_build_bucket_drops_unknown_and_repeated() {
        let build =
            build_bucket("Honesty", &["Growth", "Wealth", "growth"], &tier2(), "Family").unwrap();
        assert_eq!(build.bucket.supports, vec!["Growth"]);
        assert_eq!(build.dropped, vec!["Wealth", "growth"]);
    }

    #[test]
    fn test_build_bucket_rejects_bad_tier_one() {
        let none: [&str; 0] = [];
        assert_eq!(
            build_bucket("Wealth", &none, &tier2(), "Family"),
            Err(InvalidSelection::NotInTier2("Wealth".into()))
        );
        assert_eq!(
            build_bucket("Family", &none, &tier2(), "family"),
            Err(InvalidSelection::TierOneConflict("Family".into()))
        );
    }

    #[test]
    fn test_buckets_may_share_supports() {
        let first = build_bucket("Honesty", &["Growth"], &tier2(), "Family").unwrap();
        let second = build_bucket("Family", &["Growth"], &tier2(), "Honesty").unwrap();
        assert_eq!(first.bucket.supports, second.bucket.supports);
    }

    fn picks() -> impl Strategy<Value = Vec<(&'static str, &'static str)>> {
        prop::collection::vec(
            (
                prop::sample::select(CATEGORIES.to_vec()),
                prop::sample::select(LABELS.to_vec()),
            ),
            0..16,
        )
    }

    fn selected(picks: &[(&str, &str)]) -> SelectionState {
        let mut state = SelectionState::new();
        for (category, value) in picks {
            state.set(CatalogEntry::new(*category, *value), true);
        }
        state
    }

    proptest! {
        #[test]
        fn prop_tier2_is_ascending_set_of_selected_labels(picks in picks()) {
            let tier2 = compute_tier2(&selected(&picks));
            let expected: Vec<&str> = picks
                .iter()
                .map(|(_, value)| *value)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            prop_assert!(tier2.as_slice().windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(tier2.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn prop_double_toggle_restores_tier2(
            picks in picks(),
            category in prop::sample::select(CATEGORIES.to_vec()),
            value in prop::sample::select(LABELS.to_vec()),
        ) {
            let mut state = selected(&picks);
            let before = (state.clone(), compute_tier2(&state));

            state.toggle(CatalogEntry::new(category, value));
            state.toggle(CatalogEntry::new(category, value));

            prop_assert_eq!(&state, &before.0);
            prop_assert_eq!(compute_tier2(&state), before.1);
        }

        #[test]
        fn prop_bucket_never_holds_tier_one(
            labels in prop::sample::subsequence(LABELS.to_vec(), 2..=LABELS.len()),
            first in any::<prop::sample::Index>(),
            second in any::<prop::sample::Index>(),
            candidates in prop::collection::vec(
                prop::sample::select(vec![
                    "Achievement", "family", "Growth", " Growth ", "HONESTY", "Honesty",
                    "honesty", "Trust", "Wealth", "Zeal", "Unknown",
                ]),
                0..12,
            ),
        ) {
            let tier2 = Tier2Set::from_labels(labels.iter().copied());
            let tier_one = tier2.as_slice()[first.index(tier2.len())].clone();
            let other = tier2.as_slice()[second.index(tier2.len())].clone();
            prop_assume!(tier_one != other);

            let build = build_bucket(&tier_one, &candidates, &tier2, &other).unwrap();

            prop_assert!(!build.bucket.supports.contains(&tier_one));
            prop_assert!(!build.bucket.supports.contains(&other));
            prop_assert!(build.bucket.supports.iter().all(|s| tier2.contains(s)));
            prop_assert_eq!(
                build.bucket.supports.len() + build.dropped.len(),
                candidates.len()
            );
        }
    }
}
