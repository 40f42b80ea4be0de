//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use valuecards_application::{BehaviorConfig, ExportSettings};

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("max_attempts cannot be 0")]
    InvalidMaxAttempts,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("export file name must end in .docx: {0}")]
    InvalidFileName(String),
}

/// Raw enhancement provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnhancementConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Model used to rephrase statements
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for FileEnhancementConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.7,
        }
    }
}

/// Raw access gate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAccessConfig {
    /// Require the shared secret before enhancing
    pub required: bool,
    /// Environment variable holding the shared secret
    pub secret_env: String,
    /// Wrong guesses allowed before the gate locks
    pub max_attempts: u32,
}

impl Default for FileAccessConfig {
    fn default() -> Self {
        Self {
            required: true,
            secret_env: "VALUE_CARDS_ACCESS_SECRET".to_string(),
            max_attempts: 3,
        }
    }
}

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Timeout in seconds for the enhancement call
    pub timeout_seconds: Option<u64>,
    /// Clear enhanced statements when their drafts change
    pub clear_stale_enhancement: bool,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(valuecards_application::config::DEFAULT_TIMEOUT_SECONDS),
            clear_stale_enhancement: true,
        }
    }
}

/// Raw export configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    pub file_name: String,
    pub title: String,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        let settings = ExportSettings::default();
        Self {
            file_name: settings.file_name,
            title: settings.title,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enhancement: FileEnhancementConfig,
    pub access: FileAccessConfig,
    pub behavior: FileBehaviorConfig,
    pub export: FileExportConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.behavior.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.access.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidMaxAttempts);
        }

        if self.enhancement.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !self.export.file_name.to_ascii_lowercase().ends_with(".docx") {
            return Err(ConfigValidationError::InvalidFileName(
                self.export.file_name.clone(),
            ));
        }

        Ok(())
    }

    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.behavior.timeout_seconds)
            .with_clear_stale_enhancement(self.behavior.clear_stale_enhancement)
    }

    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            title: self.export.title.clone(),
            file_name: self.export.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[enhancement]
base_url = "http://localhost:11434/v1"
model = "llama3"
api_key_env = "LOCAL_KEY"
temperature = 0.2

[access]
required = false
secret_env = "MY_SECRET"
max_attempts = 5

[behavior]
timeout_seconds = 10
clear_stale_enhancement = false

[export]
file_name = "values.docx"
title = "Values"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.enhancement.base_url, "http://localhost:11434/v1");
        assert_eq!(config.enhancement.model, "llama3");
        assert!(!config.access.required);
        assert_eq!(config.access.max_attempts, 5);
        assert_eq!(config.behavior.timeout_seconds, Some(10));
        assert_eq!(config.export.title, "Values");
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[enhancement]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.enhancement.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.enhancement.api_key_env, "OPENAI_API_KEY");
        assert!(config.access.required);
        assert_eq!(config.behavior.timeout_seconds, Some(30));
        assert_eq!(config.export.file_name, "my_values_statements.docx");
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[behavior]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config: FileConfig = toml::from_str("[access]\nmax_attempts = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxAttempts));
    }

    #[test]
    fn test_validate_empty_model() {
        let config: FileConfig = toml::from_str("[enhancement]\nmodel = \" \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_file_name() {
        let config: FileConfig = toml::from_str("[export]\nfile_name = \"values.pdf\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_behavior_config_conversion() {
        let config = FileConfig::default();
        let behavior = config.behavior_config();
        assert_eq!(behavior.timeout, Some(Duration::from_secs(30)));
        assert!(behavior.clear_stale_enhancement);
    }
}
