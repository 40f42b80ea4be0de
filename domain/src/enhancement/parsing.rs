//! Splitting a numbered two-part model reply back into two statements.

use super::EnhancedStatements;
use thiserror::Error;

/// The reply did not contain two recognizable statements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyParseError {
    #[error("Empty reply")]
    Empty,

    #[error("Reply did not contain two numbered statements")]
    MissingStatements,
}

/// Parse a reply of the form
///
/// ```text
/// 1. First rewritten statement
/// 2. Second rewritten statement
/// ```
///
/// Markers may also be written `1)`, `1:` or `Statement 1:` and may be
/// wrapped in markdown bold. A bold lead-in such as `**Honesty**:` after
/// the marker is dropped. A statement ends at the next marker or at the
/// first blank line once it has text. A marker-free reply made of exactly
/// two paragraphs is accepted as well.
pub fn parse_enhanced_reply(reply: &str) -> Result<EnhancedStatements, ReplyParseError> {
    if reply.trim().is_empty() {
        return Err(ReplyParseError::Empty);
    }

    if let Some(statements) = parse_numbered(reply) {
        return Ok(statements);
    }

    let paragraphs: Vec<String> = reply
        .split("\n\n")
        .map(|p| clean(&p.lines().map(str::trim).collect::<Vec<_>>().join(" ")))
        .filter(|p| !p.is_empty())
        .collect();

    match <[String; 2]>::try_from(paragraphs) {
        Ok([first, second]) => Ok(EnhancedStatements::new(first, second)),
        Err(_) => Err(ReplyParseError::MissingStatements),
    }
}

fn parse_numbered(reply: &str) -> Option<EnhancedStatements> {
    let mut sections: [Option<String>; 2] = [None, None];
    let mut current: Option<usize> = None;

    for line in reply.lines() {
        if let Some((number, text)) = strip_marker(line) {
            let slot = &mut sections[number - 1];
            if slot.is_some() {
                // A second "1." means the reply restarted its list; stop here.
                break;
            }
            *slot = Some(strip_lead_in(text).to_string());
            current = Some(number - 1);
            continue;
        }

        let Some(index) = current else { continue };
        let Some(section) = sections[index].as_mut() else { continue };
        let text = line.trim();
        if text.is_empty() {
            // Whatever follows a blank line is commentary, not statement text.
            if !section.is_empty() {
                current = None;
            }
            continue;
        }
        if !section.is_empty() {
            section.push(' ');
        }
        section.push_str(text);
    }

    let [first, second] = sections;
    let first = clean(&first?);
    let second = clean(&second?);
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some(EnhancedStatements::new(first, second))
}

fn strip_marker(line: &str) -> Option<(usize, &str)> {
    let mut rest = line.trim_start();
    let bold = rest.starts_with("**");
    if bold {
        rest = &rest[2..];
    }

    if let Some(word) = rest.get(..9)
        && word.eq_ignore_ascii_case("statement")
    {
        rest = rest[9..].trim_start();
    }

    let number = match rest.chars().next()? {
        '1' => 1,
        '2' => 2,
        _ => return None,
    };

    let rest = rest[1..].strip_prefix(&['.', ')', ':'][..])?;
    // Close `**Statement 1:**`, but leave `1.**Label**:` for the lead-in check.
    let rest = match rest.strip_prefix("**") {
        Some(unbolded) if bold => unbolded,
        _ => rest,
    };
    Some((number, rest.trim()))
}

/// Drop a bold label in front of the statement text: `**Label**: text` or
/// `**Label:** text`. Bold text without a trailing colon is kept.
fn strip_lead_in(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("**") else {
        return text;
    };
    let Some(end) = inner.find("**") else {
        return text;
    };
    let (label, after) = (&inner[..end], &inner[end + 2..]);
    if label.trim_end().ends_with(':') {
        return after.trim_start();
    }
    match after.strip_prefix(':') {
        Some(after) => after.trim_start(),
        None => text,
    }
}

fn clean(text: &str) -> String {
    text.replace("**", "")
        .trim()
        .trim_matches('*')
        .trim()
        .trim_matches(|c| c == '"' || c == '\u{201c}' || c == '\u{201d}')
        .trim()
        .to_string()
}
