//! Slash command parsing for the questionnaire REPL

use std::path::PathBuf;
use std::str::FromStr;
use valuecards_domain::BucketSide;

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Categories,
    Category(usize),
    Toggle {
        label: String,
        category: Option<String>,
    },
    Tier2,
    TierOne(Vec<String>),
    Support {
        side: BucketSide,
        values: Vec<String>,
    },
    Buckets,
    Statements,
    Unlock,
    Enhance,
    Preview,
    Export(Option<PathBuf>),
    Sources,
    Help,
    Quit,
}

pub const HELP: &str = "\
  /categories            - List the value categories
  /category <n>          - Show the values of category n
  /toggle <value>        - Switch a value on or off (bare text works too)
  /toggle <n> <value>    - Same, naming the category by number
  /tier2                 - Show the selected (Tier 2) values
  /tier1 <a> | <b>       - Promote two Tier 2 values to Tier 1
  /support <1|2> <a>, .. - Set the supports of a Tier 1 value
  /buckets               - Show both buckets
  /statements            - Show the draft (and enhanced) statements
  /unlock                - Unlock statement enhancement (asks for the secret)
  /enhance               - Polish the drafts with the language model
  /preview               - Show the export document as text
  /export [path]         - Write the .docx document
  /sources               - Where the value words come from
  /help, /h, /?          - Show this help
  /quit, /exit, /q       - Exit";

impl ReplCommand {
    /// Parse one input line. Lines without a leading `/` toggle a value.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::toggle(line));
        };
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "categories" | "cats" => Ok(Self::Categories),
            "category" | "cat" => args
                .parse::<usize>()
                .map(Self::Category)
                .map_err(|_| "Usage: /category <number>".to_string()),
            "toggle" | "t" => {
                if args.is_empty() {
                    return Err("Usage: /toggle [<category number>] <value>".to_string());
                }
                Ok(Self::toggle(args))
            }
            "tier2" => Ok(Self::Tier2),
            "tier1" => {
                let separator = if args.contains('|') { '|' } else { ',' };
                Ok(Self::TierOne(split_list(args, separator)))
            }
            "support" | "s" => {
                let (side, values) = match args.split_once(char::is_whitespace) {
                    Some((side, values)) => (side, values),
                    None => (args, ""),
                };
                let side = BucketSide::from_str(side)
                    .map_err(|_| "Usage: /support <1|2> <value>, <value>, ...".to_string())?;
                Ok(Self::Support {
                    side,
                    values: split_list(values, ','),
                })
            }
            "buckets" => Ok(Self::Buckets),
            "statements" | "st" => Ok(Self::Statements),
            "unlock" => {
                if !args.is_empty() {
                    // Never take the secret inline: it would be echoed and kept in history.
                    return Err("Usage: /unlock (the secret is asked for without echo)".to_string());
                }
                Ok(Self::Unlock)
            }
            "enhance" => Ok(Self::Enhance),
            "preview" => Ok(Self::Preview),
            "export" => Ok(Self::Export((!args.is_empty()).then(|| PathBuf::from(args)))),
            "sources" => Ok(Self::Sources),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command: /{}\nType /help for available commands",
                name
            )),
        }
    }

    fn toggle(args: &str) -> Self {
        // `3 Honesty` names the category by position, `Relationships: Loyalty` by name
        if let Some((first, rest)) = args.split_once(char::is_whitespace)
            && first.parse::<usize>().is_ok()
        {
            return Self::Toggle {
                label: rest.trim().to_string(),
                category: Some(first.to_string()),
            };
        }
        match args.split_once(':') {
            Some((category, label)) if !label.trim().is_empty() => Self::Toggle {
                label: label.trim().to_string(),
                category: Some(category.trim().to_string()),
            },
            _ => Self::Toggle {
                label: args.to_string(),
                category: None,
            },
        }
    }
}

fn split_list(args: &str, separator: char) -> Vec<String> {
    args.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_toggles() {
        assert_eq!(
            ReplCommand::parse("Job Security").unwrap(),
            ReplCommand::Toggle {
                label: "Job Security".into(),
                category: None
            }
        );
    }

    #[test]
    fn test_toggle_with_category_number() {
        assert_eq!(
            ReplCommand::parse("/toggle 3 Loyalty").unwrap(),
            ReplCommand::Toggle {
                label: "Loyalty".into(),
                category: Some("3".into())
            }
        );
    }

    #[test]
    fn test_toggle_with_category_label() {
        assert_eq!(
            ReplCommand::parse("/t Relationships: Loyalty").unwrap(),
            ReplCommand::Toggle {
                label: "Loyalty".into(),
                category: Some("Relationships".into())
            }
        );
    }

    #[test]
    fn test_tier1_separators() {
        let expected = ReplCommand::TierOne(vec!["Honesty".into(), "Job Security".into()]);
        assert_eq!(ReplCommand::parse("/tier1 Honesty | Job Security").unwrap(), expected);
        assert_eq!(ReplCommand::parse("/tier1 Honesty, Job Security").unwrap(), expected);
    }

    #[test]
    fn test_support() {
        assert_eq!(
            ReplCommand::parse("/support 2 Growth, Trust").unwrap(),
            ReplCommand::Support {
                side: BucketSide::Second,
                values: vec!["Growth".into(), "Trust".into()]
            }
        );
        assert_eq!(
            ReplCommand::parse("/support 1").unwrap(),
            ReplCommand::Support {
                side: BucketSide::First,
                values: vec![]
            }
        );
        assert!(ReplCommand::parse("/support 7 Growth").is_err());
    }

    #[test]
    fn test_export_path() {
        assert_eq!(ReplCommand::parse("/export").unwrap(), ReplCommand::Export(None));
        assert_eq!(
            ReplCommand::parse("/export out/values.docx").unwrap(),
            ReplCommand::Export(Some(PathBuf::from("out/values.docx")))
        );
    }

    #[test]
    fn test_unlock_never_takes_inline_secret() {
        assert_eq!(ReplCommand::parse("/unlock").unwrap(), ReplCommand::Unlock);
        let err = ReplCommand::parse("/unlock hunter2").unwrap_err();
        assert!(err.contains("without echo"));
        assert!(!err.contains("hunter2"));
    }

    #[test]
    fn test_unknown_and_usage_errors() {
        assert!(ReplCommand::parse("/dance").unwrap_err().contains("Unknown command"));
        assert!(ReplCommand::parse("/category x").is_err());
        assert_eq!(ReplCommand::parse("/q").unwrap(), ReplCommand::Quit);
    }
}
