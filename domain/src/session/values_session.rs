//! Session-scoped questionnaire state

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::error::InvalidSelection;
use crate::enhancement::EnhancedStatements;
use crate::export::{ExportContents, ExportDocument};
use crate::selection::SelectionState;
use crate::statement::DraftStatements;
use crate::tier::{
    Bucket, BucketBuild, BucketSide, Tier2Set, TierOneChoice, build_bucket, compute_tier2,
    validate_tier_one_choice,
};
use std::sync::Arc;

/// Everything one user has done so far.
///
/// Tier 2, buckets and drafts are derived on every read from the stored
/// selections; only user decisions are kept here. Each session owns its
/// state; only the catalog is shared.
#[derive(Debug, Clone)]
pub struct ValuesSession {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    tier_one: Option<TierOneChoice>,
    supports: [Vec<String>; 2],
    enhanced: Option<Enhancement>,
    clear_stale_enhancement: bool,
}

#[derive(Debug, Clone)]
struct Enhancement {
    statements: EnhancedStatements,
    from: DraftStatements,
}

impl ValuesSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            tier_one: None,
            supports: [Vec::new(), Vec::new()],
            enhanced: None,
            clear_stale_enhancement: true,
        }
    }

    pub fn with_clear_stale_enhancement(mut self, clear: bool) -> Self {
        self.clear_stale_enhancement = clear;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ==================== Tier 2 ====================

    /// Toggle a value by label, optionally naming its category.
    ///
    /// Returns the resolved entry and its new state.
    pub fn toggle(
        &mut self,
        label: &str,
        category: Option<&str>,
    ) -> Result<(CatalogEntry, bool), InvalidSelection> {
        let entry = self.catalog.resolve(label, category)?;
        let selected = self.selection.toggle(entry.clone());
        self.after_selection_change();
        Ok((entry, selected))
    }

    pub fn tier2(&self) -> Tier2Set {
        compute_tier2(&self.selection)
    }

    // ==================== Tier 1 ====================

    /// Promote exactly two Tier 2 values. A new pair discards the supports
    /// assigned under the previous one.
    pub fn choose_tier_one<S: AsRef<str>>(
        &mut self,
        candidates: &[S],
    ) -> Result<TierOneChoice, InvalidSelection> {
        let choice = validate_tier_one_choice(candidates, &self.tier2())?;
        if self.tier_one.as_ref() != Some(&choice) {
            self.supports = [Vec::new(), Vec::new()];
        }
        self.tier_one = Some(choice.clone());
        self.after_bucket_change();
        Ok(choice)
    }

    pub fn tier_one(&self) -> Option<&TierOneChoice> {
        self.tier_one.as_ref()
    }

    /// Tier 2 values that may still be used as supports
    pub fn support_options(&self) -> Vec<String> {
        match &self.tier_one {
            Some(choice) => self
                .tier2()
                .support_options(choice)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Replace the supports of one bucket.
    ///
    /// Invalid candidates are filtered out and returned in
    /// [`BucketBuild::dropped`].
    pub fn assign_supports<S: AsRef<str>>(
        &mut self,
        side: BucketSide,
        candidates: &[S],
    ) -> Result<BucketBuild, InvalidSelection> {
        let choice = self
            .tier_one
            .as_ref()
            .ok_or(InvalidSelection::NoTierOneChoice)?;
        let build = build_bucket(
            choice.get(side),
            candidates,
            &self.tier2(),
            choice.get(side.other()),
        )?;
        self.supports[index(side)] = build.bucket.supports.clone();
        self.after_bucket_change();
        Ok(build)
    }

    /// Both buckets, rebuilt from current Tier 2
    pub fn buckets(&self) -> Option<[Bucket; 2]> {
        let choice = self.tier_one.as_ref()?;
        let tier2 = self.tier2();
        let first = self.rebuild(choice, BucketSide::First, &tier2)?;
        let second = self.rebuild(choice, BucketSide::Second, &tier2)?;
        Some([first, second])
    }

    fn rebuild(&self, choice: &TierOneChoice, side: BucketSide, tier2: &Tier2Set) -> Option<Bucket> {
        build_bucket(
            choice.get(side),
            &self.supports[index(side)],
            tier2,
            choice.get(side.other()),
        )
        .ok()
        .map(|build| build.bucket)
    }

    // ==================== Statements ====================

    pub fn drafts(&self) -> Option<DraftStatements> {
        self.buckets()
            .map(|[first, second]| DraftStatements::compose(&first, &second))
    }

    /// Record enhanced statements produced from `from`.
    ///
    /// Ignored when the drafts have moved on since the request was made and
    /// stale results are being cleared.
    pub fn apply_enhancement(&mut self, from: DraftStatements, statements: EnhancedStatements) -> bool {
        if self.clear_stale_enhancement && self.drafts().as_ref() != Some(&from) {
            return false;
        }
        self.enhanced = Some(Enhancement { statements, from });
        true
    }

    pub fn enhanced(&self) -> Option<&EnhancedStatements> {
        self.enhanced.as_ref().map(|e| &e.statements)
    }

    /// Whether the enhanced statements were made from different drafts
    pub fn is_enhancement_stale(&self) -> bool {
        match &self.enhanced {
            Some(e) => self.drafts().as_ref() != Some(&e.from),
            None => false,
        }
    }

    // ==================== Export ====================

    pub fn export_document(&self, title: &str) -> ExportDocument {
        let tier2 = self.tier2();
        let buckets = self.buckets();
        let drafts = self.drafts();
        ExportDocument::build(&ExportContents {
            title,
            tier2: &tier2,
            buckets: buckets.as_ref().map(|[a, b]| [a, b]),
            drafts: drafts.as_ref(),
            enhanced: self.enhanced(),
        })
    }

    // ==================== Invalidation ====================

    fn after_selection_change(&mut self) {
        let tier2 = self.tier2();
        let still_valid = self
            .tier_one
            .as_ref()
            .is_some_and(|c| tier2.contains(c.first()) && tier2.contains(c.second()));
        if self.tier_one.is_some() && !still_valid {
            self.tier_one = None;
            self.supports = [Vec::new(), Vec::new()];
        }
        self.after_bucket_change();
    }

    fn after_bucket_change(&mut self) {
        if self.clear_stale_enhancement && self.is_enhancement_stale() {
            self.enhanced = None;
        }
    }
}

fn index(side: BucketSide) -> usize {
    match side {
        BucketSide::First => 0,
        BucketSide::Second => 1,
    }
}
