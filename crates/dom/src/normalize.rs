//! Whitespace normalization shared by parser and serializer
//!
//! Both directions go through these functions, so a canonical string always
//! maps back to itself:
//! - text runs are trimmed at their outer edges only, never collapsed, and
//!   may not contain `<`
//! - element names may not contain whitespace or angle brackets
//! - neighbouring rendered nodes are always one space apart

use crate::error::{ParseError, Result};
use crate::types::NodeType;

pub const TAG_OPEN: char = '<';
pub const TAG_CLOSE: char = '>';

/// The only separator ever synthesized between rendered nodes
pub const SEPARATOR: char = ' ';

/// Trim a text run. `None` when nothing but whitespace is left.
pub fn trim_text(run: &str) -> Option<&str> {
    let trimmed = run.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Trim a text run found at `position` and check it can be written back
pub fn validate_text(run: &str, position: usize) -> Result<&str> {
    let Some(content) = trim_text(run) else {
        return Err(ParseError::EmptyText { position });
    };

    if content.contains(TAG_OPEN) {
        return Err(ParseError::InvalidText {
            content: content.to_string(),
            position,
        });
    }

    Ok(content)
}

fn is_reserved(c: char) -> bool {
    c == TAG_OPEN || c == TAG_CLOSE || c.is_whitespace()
}

/// Validate an element name found at `position`
pub fn validate_element_name(name: &str, position: usize) -> Result<()> {
    if name.is_empty() {
        return Err(ParseError::EmptyTagName { position });
    }

    if name.chars().any(is_reserved) {
        return Err(ParseError::InvalidTagName {
            name: name.to_string(),
            position,
        });
    }

    Ok(())
}

/// Separator between two consecutive rendered nodes
///
/// Spelled out per pair of kinds so a new node kind cannot slip through.
pub fn separator(prev: NodeType, next: NodeType) -> char {
    match (prev, next) {
        // `<a><b>` has no text between the tags to carry a boundary
        (NodeType::Element, NodeType::Element) => SEPARATOR,
        // The parser trimmed this boundary off the text run
        (NodeType::Text, NodeType::Element) | (NodeType::Element, NodeType::Text) => SEPARATOR,
        // Only reachable for hand-built trees; re-parses as one run
        (NodeType::Text, NodeType::Text) => SEPARATOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text(" whitespace "), Some("whitespace"));
        assert_eq!(trim_text("a  b"), Some("a  b"));
        assert_eq!(trim_text("\t a \n b \r\n"), Some("a \n b"));
        assert_eq!(trim_text("   "), None);
        assert_eq!(trim_text(""), None);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let once = trim_text("  x  y  ").unwrap();
        assert_eq!(trim_text(once), Some(once));
    }

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("  a > b ", 0), Ok("a > b"));
        assert_eq!(
            validate_text(" \n ", 4),
            Err(ParseError::EmptyText { position: 4 })
        );
        assert_eq!(
            validate_text(" x<y ", 1),
            Err(ParseError::InvalidText {
                content: "x<y".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_validate_element_name() {
        assert!(validate_element_name("a", 0).is_ok());
        assert!(validate_element_name("h1-x.y", 0).is_ok());
        assert_eq!(
            validate_element_name("", 3),
            Err(ParseError::EmptyTagName { position: 3 })
        );
        assert_eq!(
            validate_element_name("a b", 1),
            Err(ParseError::InvalidTagName {
                name: "a b".to_string(),
                position: 1
            })
        );
        assert!(validate_element_name("a<b", 0).is_err());
        assert!(validate_element_name("a>", 0).is_err());
        assert!(validate_element_name("a\u{a0}b", 0).is_err());
    }

    #[test]
    fn test_separator_between_all_kinds() {
        let kinds = [NodeType::Element, NodeType::Text];
        for prev in kinds {
            for next in kinds {
                assert_eq!(separator(prev, next), ' ');
            }
        }
    }
}
