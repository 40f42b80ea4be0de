//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for value-cards
#[derive(Parser, Debug, Default)]
#[command(name = "value-cards")]
#[command(author, version, about = "Values questionnaire - pick what matters and turn it into two statements")]
#[command(long_about = r#"
Value Cards walks you from a catalog of value words to two values statements.

The process has four steps:
1. Tier 2: switch on every value that resonates
2. Tier 1: promote exactly two of them
3. Buckets: assign the remaining Tier 2 values as supports of each Tier 1 value
4. Statements: read the drafts, optionally have a language model polish them,
   and export everything as a .docx document

Without --value flags an interactive questionnaire starts.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./value-cards.toml  Project-level config
3. ~/.config/value-cards/config.toml   Global config

Example:
  value-cards
  value-cards --value Honesty --value Growth --value Family \
      --tier1 Honesty --tier1 Family --support1 Growth --out values.docx
"#)]
pub struct Cli {
    /// Select a value (can be specified multiple times).
    ///
    /// `Category:Value` disambiguates; the category may be its position,
    /// its numeral or a unique part of its name (`4:Loyalty`, `IV:Loyalty`,
    /// `Relationships:Loyalty`).
    #[arg(long, value_name = "VALUE")]
    pub value: Vec<String>,

    /// Tier 1 value (specify exactly twice)
    #[arg(long = "tier1", value_name = "VALUE")]
    pub tier1: Vec<String>,

    /// Comma-separated supports of the first Tier 1 value
    #[arg(long, value_name = "VALUES", value_delimiter = ',')]
    pub support1: Vec<String>,

    /// Comma-separated supports of the second Tier 1 value
    #[arg(long, value_name = "VALUES", value_delimiter = ',')]
    pub support2: Vec<String>,

    /// Ask the language model to polish the draft statements
    #[arg(long)]
    pub enhance: bool,

    /// Write the .docx export to this file or directory
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print the value catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    /// (an explicit --config is still read, on its own)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether any questionnaire answers were given on the command line
    pub fn is_scripted(&self) -> bool {
        !self.value.is_empty() || !self.tier1.is_empty()
    }

    /// Split `Category:Value` into its parts
    pub fn split_value(raw: &str) -> (&str, Option<&str>) {
        match raw.split_once(':') {
            Some((category, value)) if !value.trim().is_empty() => (value.trim(), Some(category.trim())),
            _ => (raw.trim(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scripted_flags() {
        let cli = Cli::parse_from([
            "value-cards",
            "--value",
            "Honesty",
            "--value",
            "Family",
            "--tier1",
            "Honesty",
            "--tier1",
            "Family",
            "--support1",
            "Growth,Curiosity",
            "-vv",
        ]);
        assert!(cli.is_scripted());
        assert_eq!(cli.tier1, vec!["Honesty", "Family"]);
        assert_eq!(cli.support1, vec!["Growth", "Curiosity"]);
        assert!(cli.support2.is_empty());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_flags_is_interactive() {
        let cli = Cli::parse_from(["value-cards"]);
        assert!(!cli.is_scripted());
        assert!(!cli.enhance);
    }

    #[test]
    fn test_split_value() {
        assert_eq!(Cli::split_value("Honesty"), ("Honesty", None));
        assert_eq!(
            Cli::split_value("Relationships: Loyalty"),
            ("Loyalty", Some("Relationships"))
        );
        assert_eq!(Cli::split_value("Odd:"), ("Odd:", None));
    }
}
