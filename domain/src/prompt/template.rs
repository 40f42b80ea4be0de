//! Prompt templates for rephrasing draft statements

use crate::statement::DraftStatements;

/// Templates for the single combined enhancement request
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the enhancement request
    pub fn enhance_system() -> &'static str {
        r#"You are a thoughtful writing coach helping a person put their personal values into words.
Rewrite each statement as one clear, warm, first-person sentence.
Keep every value the person named and do not add new ones.
Do not add commentary, headings or explanations."#
    }

    /// User prompt carrying both drafts in one request
    pub fn enhance_prompt(drafts: &DraftStatements) -> String {
        format!(
            r#"Please rephrase the following two values statements.

1. {}
2. {}

Reply with exactly two numbered lines, in the same order:
1. <rephrased first statement>
2. <rephrased second statement>"#,
            drafts.first, drafts.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::DraftStatements;
    use crate::tier::Bucket;

    #[test]
    fn test_enhance_prompt_numbers_both_drafts() {
        let drafts = DraftStatements::compose(
            &Bucket::new("Honesty").with_supports(["Growth"]),
            &Bucket::new("Family"),
        );
        let prompt = PromptTemplate::enhance_prompt(&drafts);
        assert!(prompt.contains("1. I value Honesty supported by Growth\n"));
        assert!(prompt.contains("2. I value Family supported by \n"));
        assert!(prompt.contains("exactly two numbered lines"));
    }

    #[test]
    fn test_system_prompt_forbids_new_values() {
        assert!(PromptTemplate::enhance_system().contains("do not add new ones"));
    }
}
