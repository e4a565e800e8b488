//! Error types for shorthand parsing and rendering
//!
//! Flat hierarchy: every failure is a malformed tag or a malformed text run.
//! Positions are byte offsets of the tag's opening `<` or of the run; nodes
//! built outside a parse report position 0.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unterminated tag at byte {position}: missing '>'")]
    UnterminatedTag { position: usize },

    #[error("Empty tag name at byte {position}")]
    EmptyTagName { position: usize },

    #[error("Invalid tag name {name:?} at byte {position}")]
    InvalidTagName { name: String, position: usize },

    #[error("Empty text at byte {position}")]
    EmptyText { position: usize },

    #[error("Invalid text {content:?} at byte {position}: contains '<'")]
    InvalidText { content: String, position: usize },
}

impl ParseError {
    /// Byte offset of the offending tag or text run
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnterminatedTag { position }
            | ParseError::EmptyTagName { position }
            | ParseError::InvalidTagName { position, .. }
            | ParseError::EmptyText { position }
            | ParseError::InvalidText { position, .. } => *position,
        }
    }

    /// Same error, reported at a different offset
    pub(crate) fn at(self, position: usize) -> Self {
        match self {
            ParseError::UnterminatedTag { .. } => ParseError::UnterminatedTag { position },
            ParseError::EmptyTagName { .. } => ParseError::EmptyTagName { position },
            ParseError::InvalidTagName { name, .. } => {
                ParseError::InvalidTagName { name, position }
            }
            ParseError::EmptyText { .. } => ParseError::EmptyText { position },
            ParseError::InvalidText { content, .. } => {
                ParseError::InvalidText { content, position }
            }
        }
    }
}
