//! Catalog entities

use crate::core::error::{CatalogError, InvalidSelection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named group of value labels, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub values: Vec<String>,
}

impl Category {
    pub fn new<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Find a value in this category, ignoring ASCII case.
    pub fn find(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.values
            .iter()
            .find(|v| v.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }
}

/// A single (category, value) position in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: String,
    pub value: String,
}

impl CatalogEntry {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

/// Attribution for where the value words come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// Read-only, ordered mapping of category label to value labels.
///
/// Built once per process and shared by every session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    #[serde(default)]
    sources: Vec<Source>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate categories and duplicate values
    /// inside one category.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if category.label.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryLabel);
            }
            if !seen_categories.insert(category.label.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.label.clone()));
            }
            let mut seen_values = HashSet::new();
            for value in &category.values {
                if !seen_values.insert(value.as_str()) {
                    return Err(CatalogError::DuplicateItem {
                        category: category.label.clone(),
                        item: value.clone(),
                    });
                }
            }
        }

        Ok(Self {
            categories,
            sources: Vec::new(),
        })
    }

    pub(crate) fn from_trusted(categories: Vec<Category>, sources: Vec<Source>) -> Self {
        Self {
            categories,
            sources,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of value labels across all categories
    pub fn value_count(&self) -> usize {
        self.categories.iter().map(|c| c.values.len()).sum()
    }

    /// Category by its 1-based display position
    pub fn category_at(&self, position: usize) -> Option<&Category> {
        position
            .checked_sub(1)
            .and_then(|index| self.categories.get(index))
    }

    /// Category named by `label`.
    ///
    /// Tried in order: the exact label, the label ignoring ASCII case, the
    /// numeral in front of `". "` (`IV` for `IV. Interpersonal ...`), and a
    /// case-insensitive fragment that only one label contains.
    pub fn category(&self, label: &str) -> Option<&Category> {
        let wanted = label.trim();
        if wanted.is_empty() {
            return None;
        }

        let numeral = wanted.trim_end_matches('.');
        let found = self
            .categories
            .iter()
            .find(|c| c.label == wanted)
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.label.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| {
                self.categories.iter().find(|c| {
                    c.label
                        .split_once(". ")
                        .is_some_and(|(prefix, _)| prefix.eq_ignore_ascii_case(numeral))
                })
            });
        if found.is_some() {
            return found;
        }

        let fragment = wanted.to_lowercase();
        let mut partial = self
            .categories
            .iter()
            .filter(|c| c.label.to_lowercase().contains(&fragment));
        match (partial.next(), partial.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Every entry whose value text matches `label`, ignoring ASCII case
    pub fn find_value(&self, label: &str) -> Vec<CatalogEntry> {
        self.categories
            .iter()
            .filter_map(|c| c.find(label).map(|v| CatalogEntry::new(&c.label, v)))
            .collect()
    }

    /// Resolve user input to a single catalog entry.
    ///
    /// `category` may be a 1-based position or a category label. Without it,
    /// the label must match exactly one category.
    pub fn resolve(
        &self,
        label: &str,
        category: Option<&str>,
    ) -> Result<CatalogEntry, InvalidSelection> {
        if let Some(category) = category {
            let found = category
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|position| self.category_at(position))
                .or_else(|| self.category(category))
                .ok_or_else(|| InvalidSelection::UnknownCategory(category.trim().to_string()))?;

            return found
                .find(label)
                .map(|v| CatalogEntry::new(&found.label, v))
                .ok_or_else(|| InvalidSelection::UnknownValue(label.trim().to_string()));
        }

        let mut matches = self.find_value(label);
        match matches.len() {
            0 => Err(InvalidSelection::UnknownValue(label.trim().to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(InvalidSelection::AmbiguousValue {
                label: label.trim().to_string(),
                categories: matches.into_iter().map(|e| e.category).collect(),
            }),
        }
    }
}
