//! Shorthand parser - main entry point for reading documents
//!
//! Grammar:
//! ```text
//! document  := (element | text-run)*
//! element   := '<' name '>'
//! text-run  := one or more chars excluding '<'
//! ```
//!
//! Text runs are trimmed at their outer edges; whitespace-only runs vanish.
//! A malformed tag aborts the whole parse.

use crate::document::DocumentTree;
use crate::error::{ParseError, Result};
use crate::normalize::{self, TAG_CLOSE, TAG_OPEN};
use crate::types::{ElementNode, Node, TextNode};
use tracing::{debug, trace};

/// Stateless shorthand parser
#[derive(Debug, Clone, Copy, Default)]
pub struct DomParser;

impl DomParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse shorthand text into a document tree
    pub fn parse(&self, input: &str) -> Result<DocumentTree> {
        let mut document = DocumentTree::new();

        match parse_into(input, &mut document) {
            Ok(()) => {
                debug!(nodes = document.len(), bytes = input.len(), "Parsed document");
                Ok(document)
            }
            Err(e) => {
                debug!(error = %e, "Failed to parse document");
                Err(e)
            }
        }
    }
}

fn parse_into(input: &str, document: &mut DocumentTree) -> Result<()> {
    // Start of the pending text run
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(TAG_OPEN) {
        let tag_start = cursor + offset;
        flush_text(&input[cursor..tag_start], cursor, document)?;

        let (element, tag_end) = scan_tag(input, tag_start)?;
        let id = document.append(Node::Element(element));
        trace!(id, start = tag_start, "Appended element");

        cursor = tag_end + TAG_CLOSE.len_utf8();
    }

    flush_text(&input[cursor..], cursor, document)
}

/// Read the tag opening at `tag_start`, returns it with the offset of its `>`
fn scan_tag(input: &str, tag_start: usize) -> Result<(ElementNode, usize)> {
    let name_start = tag_start + TAG_OPEN.len_utf8();
    let rest = &input[name_start..];

    let Some(offset) = rest.find(|c: char| c == TAG_OPEN || c == TAG_CLOSE) else {
        return Err(ParseError::UnterminatedTag {
            position: tag_start,
        });
    };

    let tag_end = name_start + offset;

    if input[tag_end..].starts_with(TAG_OPEN) {
        // Another tag opens before this one closes
        return Err(ParseError::InvalidTagName {
            name: input[name_start..=tag_end].to_string(),
            position: tag_start,
        });
    }

    let name = &input[name_start..tag_end];
    let element = ElementNode::new(name).map_err(|e| e.at(tag_start))?;

    Ok((element, tag_end))
}

/// Append the run starting at `start` unless it is whitespace only
fn flush_text(run: &str, start: usize, document: &mut DocumentTree) -> Result<()> {
    if normalize::trim_text(run).is_none() {
        return Ok(());
    }

    let text = TextNode::new(run).map_err(|e| e.at(start))?;
    let id = document.append(Node::Text(text));
    trace!(id, start, "Appended text");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<DocumentTree> {
        DomParser::new().parse(input)
    }

    fn shape(doc: &DocumentTree) -> Vec<String> {
        doc.iter()
            .map(|node| match node {
                Node::Element(e) => format!("<{}>", e.name()),
                Node::Text(t) => format!("'{}'", t.content()),
            })
            .collect()
    }

    #[test]
    fn test_parse_text_only() {
        let doc = parse("test text").unwrap();
        assert_eq!(shape(&doc), vec!["'test text'"]);
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        let doc = parse(" whitespace ").unwrap();
        assert_eq!(shape(&doc), vec!["'whitespace'"]);

        let doc = parse("  a   b  ").unwrap();
        assert_eq!(shape(&doc), vec!["'a   b'"]);
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_adjacent_elements() {
        let doc = parse("<a><b><c>").unwrap();
        assert_eq!(shape(&doc), vec!["<a>", "<b>", "<c>"]);
    }

    #[test]
    fn test_whitespace_between_elements_vanishes() {
        let doc = parse("<a> <b>\n<c>").unwrap();
        assert_eq!(shape(&doc), vec!["<a>", "<b>", "<c>"]);
    }

    #[test]
    fn test_parse_mixed() {
        let doc = parse("<a> b <c> d <e>").unwrap();
        assert_eq!(shape(&doc), vec!["<a>", "'b'", "<c>", "'d'", "<e>"]);

        let doc = parse("x<a>y").unwrap();
        assert_eq!(shape(&doc), vec!["'x'", "<a>", "'y'"]);
    }

    #[test]
    fn test_stray_close_is_text() {
        let doc = parse("a > b").unwrap();
        assert_eq!(shape(&doc), vec!["'a > b'"]);
    }

    #[test]
    fn test_non_ascii() {
        let doc = parse(" héllo <ü> wörld ").unwrap();
        assert_eq!(shape(&doc), vec!["'héllo'", "<ü>", "'wörld'"]);
    }

    #[test]
    fn test_unterminated_tag() {
        assert_eq!(
            parse("<a").unwrap_err(),
            ParseError::UnterminatedTag { position: 0 }
        );
        assert_eq!(
            parse("ok <").unwrap_err(),
            ParseError::UnterminatedTag { position: 3 }
        );
    }

    #[test]
    fn test_empty_tag_name() {
        assert_eq!(
            parse("<>").unwrap_err(),
            ParseError::EmptyTagName { position: 0 }
        );
        assert_eq!(
            parse("<a><>").unwrap_err(),
            ParseError::EmptyTagName { position: 3 }
        );
    }

    #[test]
    fn test_invalid_tag_name() {
        assert_eq!(
            parse("<a b>").unwrap_err(),
            ParseError::InvalidTagName {
                name: "a b".to_string(),
                position: 0
            }
        );
        assert_eq!(
            parse("< a>").unwrap_err(),
            ParseError::InvalidTagName {
                name: " a".to_string(),
                position: 0
            }
        );
    }

    #[test]
    fn test_nested_open_is_invalid() {
        assert_eq!(
            parse("x <a<b>").unwrap_err(),
            ParseError::InvalidTagName {
                name: "a<".to_string(),
                position: 2
            }
        );
        assert!(matches!(
            parse("<<a>").unwrap_err(),
            ParseError::InvalidTagName { position: 0, .. }
        ));
    }
}
