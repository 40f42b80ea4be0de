//! Applying questionnaire answers given as command-line flags

use super::commands::Cli;
use valuecards_application::{assign_supports, choose_tier_one, toggle_value};
use valuecards_domain::{BucketSide, ValuesSession};

impl Cli {
    /// Apply `--value`, `--tier1` and `--support1/2` to the session.
    ///
    /// A rejected answer is reported and skipped; everything that was
    /// valid stays applied so the run can still export. Returns the
    /// problems in the order they were found.
    pub fn apply_answers(&self, session: &mut ValuesSession) -> Vec<String> {
        let mut problems = Vec::new();

        for raw in &self.value {
            let (label, category) = Cli::split_value(raw);
            if let Err(e) = toggle_value(session, label, category) {
                problems.push(format!("--value {}: {}", raw, e));
            }
        }

        let has_supports = !self.support1.is_empty() || !self.support2.is_empty();
        if self.tier1.is_empty() {
            if has_supports {
                problems.push("--support1/--support2 need two --tier1 values".to_string());
            }
            return problems;
        }

        if let Err(e) = choose_tier_one(session, &self.tier1) {
            problems.push(format!("--tier1: {}", e));
            if has_supports {
                problems.push("--support1/--support2 ignored without a Tier 1 pair".to_string());
            }
            return problems;
        }

        for (flag, side, candidates) in [
            ("--support1", BucketSide::First, &self.support1),
            ("--support2", BucketSide::Second, &self.support2),
        ] {
            if let Err(e) = assign_supports(session, side, candidates.as_slice()) {
                problems.push(format!("{}: {}", flag, e));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Arc;
    use valuecards_domain::Catalog;

    fn session() -> ValuesSession {
        ValuesSession::new(Arc::new(Catalog::standard()))
    }

    #[test]
    fn test_apply_valid_answers() {
        let cli = Cli::parse_from([
            "value-cards", "--value", "Honesty", "--value", "Growth", "--value", "Family",
            "--tier1", "Honesty", "--tier1", "Family", "--support1", "Growth",
        ]);
        let mut session = session();

        assert!(cli.apply_answers(&mut session).is_empty());
        let buckets = session.buckets().unwrap();
        assert_eq!(buckets[0].supports, vec!["Growth"]);
        assert!(session.drafts().is_some());
    }

    #[test]
    fn test_invalid_tier_one_keeps_tier_two() {
        let cli = Cli::parse_from([
            "value-cards", "--value", "Honesty", "--value", "Growth",
            "--tier1", "Honesty", "--tier1", "Wealth",
        ]);
        let mut session = session();

        let problems = cli.apply_answers(&mut session);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("--tier1"));
        assert!(problems[0].contains("Wealth"));
        assert_eq!(session.tier2().len(), 2);
        assert!(session.tier_one().is_none());

        // The valid part of the state still exports.
        let text = session.export_document("My Values").to_plain_text();
        assert!(text.contains("  - Growth"));
        assert!(text.contains("  - Honesty"));
    }

    #[test]
    fn test_unknown_value_is_skipped() {
        let cli = Cli::parse_from([
            "value-cards", "--value", "Honesty", "--value", "Not A Value", "--value", "Family",
        ]);
        let mut session = session();

        let problems = cli.apply_answers(&mut session);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("--value Not A Value"));
        assert_eq!(session.tier2().len(), 2);
    }

    #[test]
    fn test_supports_without_tier_one_are_reported() {
        let cli = Cli::parse_from(["value-cards", "--value", "Honesty", "--support1", "Growth"]);
        let mut session = session();

        let problems = cli.apply_answers(&mut session);
        assert_eq!(problems, vec!["--support1/--support2 need two --tier1 values"]);
        assert_eq!(session.tier2().len(), 1);
    }
}
