//! Presentation layer for value-cards
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive questionnaire.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod questionnaire;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use questionnaire::{QuestionnaireRepl, ReplCommand, prompt_unlock};
