//! Configuration file loading for value-cards
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VALUE_CARDS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./value-cards.toml` or `./.value-cards.toml`
//! 4. Global: `$XDG_CONFIG_HOME/value-cards/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAccessConfig, FileBehaviorConfig, FileConfig,
    FileEnhancementConfig, FileExportConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
