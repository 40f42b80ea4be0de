//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the enhancement timeout and export naming.

use std::time::Duration;

/// Default bound on the enhancement call
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the enhancement response before giving up.
    pub timeout: Option<Duration>,
    /// Drop enhanced statements once the drafts they came from change.
    pub clear_stale_enhancement: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            clear_stale_enhancement: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_clear_stale_enhancement(mut self, clear: bool) -> Self {
        self.clear_stale_enhancement = clear;
        self
    }
}

/// Default export file name
pub const DEFAULT_FILE_NAME: &str = "my_values_statements.docx";

/// How the export document is titled and named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub title: String,
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            title: valuecards_domain::export::DEFAULT_TITLE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_bounded() {
        let config = BehaviorConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.clear_stale_enhancement);
    }

    #[test]
    fn test_from_timeout_seconds_none() {
        assert!(BehaviorConfig::from_timeout_seconds(None).timeout.is_none());
    }

    #[test]
    fn test_export_settings_default() {
        let settings = ExportSettings::default();
        assert_eq!(settings.file_name, "my_values_statements.docx");
        assert_eq!(settings.title, "My Values Statements");
    }
}
