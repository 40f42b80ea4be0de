//! Per-session record of which catalog entries are switched on.

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mapping (category, value) → selected, defaulting to `false`.
///
/// Only `true` entries are stored, so switching an entry on and back off
/// leaves the state equal to what it was before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: BTreeSet<CatalogEntry>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one entry and return its new state
    pub fn toggle(&mut self, entry: CatalogEntry) -> bool {
        if self.selected.remove(&entry) {
            false
        } else {
            self.selected.insert(entry);
            true
        }
    }

    /// Set one entry explicitly. Returns `true` if the state changed.
    pub fn set(&mut self, entry: CatalogEntry, selected: bool) -> bool {
        if selected {
            self.selected.insert(entry)
        } else {
            self.selected.remove(&entry)
        }
    }

    pub fn is_selected(&self, entry: &CatalogEntry) -> bool {
        self.selected.contains(entry)
    }

    /// All entries currently on, ordered by (category, value)
    pub fn selected(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.selected.iter()
    }

    /// Number of entries switched on (before label deduplication)
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(category: &str, value: &str) -> CatalogEntry {
        CatalogEntry::new(category, value)
    }

    #[test]
    fn test_default_is_unselected() {
        let state = SelectionState::new();
        assert!(!state.is_selected(&entry("A", "Honesty")));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_round_trip_restores_state() {
        let mut state = SelectionState::new();
        state.toggle(entry("A", "Growth"));
        let before = state.clone();

        assert!(state.toggle(entry("B", "Family")));
        assert!(!state.toggle(entry("B", "Family")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_reports_change() {
        let mut state = SelectionState::new();
        assert!(state.set(entry("A", "Honesty"), true));
        assert!(!state.set(entry("A", "Honesty"), true));
        assert!(state.set(entry("A", "Honesty"), false));
        assert!(!state.set(entry("A", "Honesty"), false));
    }

    #[test]
    fn test_same_label_in_two_categories_is_two_entries() {
        let mut state = SelectionState::new();
        state.toggle(entry("A", "Trust"));
        state.toggle(entry("B", "Trust"));
        assert_eq!(state.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(
            picks in prop::collection::vec((0u8..4, 0u8..6), 0..12),
            extra in (0u8..4, 0u8..6),
        ) {
            let make = |(category, value): (u8, u8)| {
                entry(&format!("Category {category}"), &format!("Value {value}"))
            };
            let mut state = SelectionState::new();
            for pick in picks {
                state.toggle(make(pick));
            }
            let before = state.clone();

            let was_selected = state.is_selected(&make(extra));
            prop_assert_eq!(state.toggle(make(extra)), !was_selected);
            state.toggle(make(extra));
            prop_assert_eq!(state, before);
        }
    }
}
