//! Console output formatter for the questionnaire

use colored::Colorize;
use valuecards_application::AccessDecision;
use valuecards_domain::{
    Bucket, Catalog, Category, DraftStatements, EnhancedStatements, ExportDocument,
    SelectionState, Source, Tier2Set, TierOneChoice,
};

/// Formats questionnaire state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered category list with selection counts
    pub fn format_catalog(catalog: &Catalog, selection: &SelectionState) -> String {
        let mut output = Self::section_header("Categories");
        for (i, category) in catalog.categories().iter().enumerate() {
            let picked = selected_in(category, selection);
            let count = if picked > 0 {
                format!("({}/{})", picked, category.values.len()).green().to_string()
            } else {
                format!("({})", category.values.len()).dimmed().to_string()
            };
            output.push_str(&format!("  {:>2}. {} {}\n", i + 1, category.label, count));
        }
        output
    }

    /// Values of one category with their toggle state
    pub fn format_category(position: usize, category: &Category, selection: &SelectionState) -> String {
        let mut output = Self::section_header(&format!("{}. {}", position, category.label));
        for value in &category.values {
            let on = selection
                .selected()
                .any(|e| e.category == category.label && &e.value == value);
            let mark = if on { "[x]".green().bold() } else { "[ ]".dimmed() };
            output.push_str(&format!("  {} {}\n", mark, value));
        }
        output
    }

    /// Whole catalog, every category expanded (for `--list`)
    pub fn format_full_catalog(catalog: &Catalog) -> String {
        let mut output = Self::header("Value Catalog");
        output.push('\n');
        for (i, category) in catalog.categories().iter().enumerate() {
            output.push_str(&format!("\n{}\n", format!("{}. {}", i + 1, category.label).cyan().bold()));
            output.push_str(&Self::indent(&category.values.join(", "), "    "));
            output.push('\n');
        }
        output.push_str(&Self::footer());
        output
    }

    pub fn format_tier2(tier2: &Tier2Set) -> String {
        let mut output = Self::section_header(&format!("Tier 2 values ({})", tier2.len()));
        if tier2.is_empty() {
            output.push_str(&format!("  {}\n", "Nothing selected yet".dimmed()));
        }
        for value in tier2.iter() {
            output.push_str(&format!("  * {}\n", value));
        }
        output
    }

    pub fn format_tier_one(choice: &TierOneChoice, options: &[String]) -> String {
        let mut output = format!(
            "{} {} | {}\n",
            "Tier 1:".cyan().bold(),
            choice.first().yellow().bold(),
            choice.second().yellow().bold()
        );
        if options.is_empty() {
            output.push_str(&format!("{}\n", "No Tier 2 values left to use as supports".dimmed()));
        } else {
            output.push_str(&format!("{} {}\n", "Support options:".dimmed(), options.join(", ")));
        }
        output
    }

    pub fn format_buckets(buckets: &[Bucket; 2]) -> String {
        let mut output = Self::section_header("Buckets");
        for (i, bucket) in buckets.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {}. {} ──", i + 1, bucket.tier_one).yellow().bold()
            ));
            if bucket.supports.is_empty() {
                output.push_str(&format!("  {}\n", "no supports".dimmed()));
            }
            for support in &bucket.supports {
                output.push_str(&format!("  * {}\n", support));
            }
        }
        output
    }

    pub fn format_statements(
        drafts: &DraftStatements,
        enhanced: Option<&EnhancedStatements>,
        stale: bool,
    ) -> String {
        let mut output = Self::section_header("Draft statements");
        output.push_str(&format!("  1. {}\n  2. {}\n", drafts.first, drafts.second));

        if let Some(enhanced) = enhanced {
            let title = if stale {
                "Enhanced statements (from earlier drafts)"
            } else {
                "Enhanced statements"
            };
            output.push_str(&Self::section_header(title));
            output.push_str(&format!("  1. {}\n  2. {}\n", enhanced.first, enhanced.second));
        }
        output
    }

    pub fn format_sources(sources: &[Source]) -> String {
        let mut output = Self::section_header("Sources");
        for source in sources {
            output.push_str(&format!("  * {} {}\n", source.name, source.url.dimmed()));
        }
        output
    }

    pub fn format_access(decision: AccessDecision) -> String {
        match decision {
            AccessDecision::Allowed => format!("{} Enhancement unlocked", "v".green()),
            AccessDecision::Denied { attempts, remaining } => format!(
                "{} Wrong secret (attempt {}, {} left)",
                "x".red(),
                attempts,
                remaining
            ),
            AccessDecision::Locked { attempts } => format!(
                "{} Locked after {} attempts; enhancement is unavailable this session",
                "x".red(),
                attempts
            ),
        }
    }

    /// Plain-text preview of the export document
    pub fn format_document(document: &ExportDocument) -> String {
        format!("{}\n{}", Self::header(document.title()), document.to_plain_text())
    }

    pub fn error(message: impl std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn notice(message: impl std::fmt::Display) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn selected_in(category: &Category, selection: &SelectionState) -> usize {
    selection
        .selected()
        .filter(|e| e.category == category.label)
        .count()
}
