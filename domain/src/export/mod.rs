//! Export document model.
//!
//! [`ExportDocument`] is the format-independent layout of the final
//! document: an ordered list of blocks. Renderers in the infrastructure
//! layer turn it into bytes.

use crate::enhancement::EnhancedStatements;
use crate::statement::DraftStatements;
use crate::tier::{Bucket, BucketSide, Tier2Set};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "My Values Statements";
pub const NO_VALUES_PLACEHOLDER: &str = "No values assigned";
pub const NO_DRAFTS_PLACEHOLDER: &str = "No draft statements composed";
pub const NO_ENHANCED_PLACEHOLDER: &str = "No AI enhanced statements generated";

pub const TIER2_HEADING: &str = "Tier 2 Values List";
pub const TIER1_HEADING: &str = "Tier 1 Values";
pub const DRAFTS_HEADING: &str = "Draft Statements";
pub const ENHANCED_HEADING: &str = "AI Enhanced Draft Statements";

/// One layout element of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    Heading(String),
    Subheading(String),
    Bullet(String),
    Paragraph(String),
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Title(t)
            | Block::Heading(t)
            | Block::Subheading(t)
            | Block::Bullet(t)
            | Block::Paragraph(t) => t,
        }
    }
}

/// Everything that goes into the document
#[derive(Debug, Clone, Copy)]
pub struct ExportContents<'a> {
    pub title: &'a str,
    pub tier2: &'a Tier2Set,
    /// `None` until the two Tier 1 values have been chosen
    pub buckets: Option<[&'a Bucket; 2]>,
    pub drafts: Option<&'a DraftStatements>,
    pub enhanced: Option<&'a EnhancedStatements>,
}

/// Ordered blocks of the export document.
///
/// Every section is always present; empty lists render a placeholder line
/// so the structure is the same however far the user got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    blocks: Vec<Block>,
}

impl ExportDocument {
    pub fn build(contents: &ExportContents<'_>) -> Self {
        let mut blocks = vec![Block::Title(contents.title.to_string())];

        blocks.push(Block::Heading(TIER2_HEADING.to_string()));
        push_list(&mut blocks, contents.tier2.iter());

        blocks.push(Block::Heading(TIER1_HEADING.to_string()));
        for side in [BucketSide::First, BucketSide::Second] {
            match contents.buckets {
                Some(buckets) => {
                    let bucket = buckets[usize::from(side.number() - 1)];
                    blocks.push(Block::Subheading(bucket.tier_one.clone()));
                    push_list(&mut blocks, bucket.supports.iter().map(String::as_str));
                }
                None => {
                    blocks.push(Block::Subheading(format!("Tier 1 Value {side}")));
                    push_list(&mut blocks, std::iter::empty());
                }
            }
        }

        blocks.push(Block::Heading(DRAFTS_HEADING.to_string()));
        match contents.drafts {
            Some(drafts) => {
                blocks.push(Block::Paragraph(drafts.first.to_string()));
                blocks.push(Block::Paragraph(drafts.second.to_string()));
            }
            None => blocks.push(Block::Paragraph(NO_DRAFTS_PLACEHOLDER.to_string())),
        }

        blocks.push(Block::Heading(ENHANCED_HEADING.to_string()));
        match contents.enhanced {
            Some(enhanced) => {
                blocks.push(Block::Paragraph(enhanced.first.clone()));
                blocks.push(Block::Paragraph(enhanced.second.clone()));
            }
            None => blocks.push(Block::Paragraph(NO_ENHANCED_PLACEHOLDER.to_string())),
        }

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn title(&self) -> &str {
        self.blocks.first().map(Block::text).unwrap_or(DEFAULT_TITLE)
    }

    /// Plain text rendering, one block per line
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Title(t) => {
                    out.push_str(t);
                    out.push('\n');
                    out.push_str(&"=".repeat(t.chars().count()));
                }
                Block::Heading(t) => {
                    out.push('\n');
                    out.push_str(t);
                    out.push('\n');
                    out.push_str(&"-".repeat(t.chars().count()));
                }
                Block::Subheading(t) => {
                    out.push('\n');
                    out.push_str(t);
                }
                Block::Bullet(t) => {
                    out.push_str("  - ");
                    out.push_str(t);
                }
                Block::Paragraph(t) => out.push_str(t),
            }
            out.push('\n');
        }
        out
    }
}

fn push_list<'a>(blocks: &mut Vec<Block>, items: impl Iterator<Item = &'a str>) {
    let before = blocks.len();
    blocks.extend(items.map(|item| Block::Bullet(item.to_string())));
    if blocks.len() == before {
        blocks.push(Block::Paragraph(NO_VALUES_PLACEHOLDER.to_string()));
    }
}
