//! DOM Shorthand Serialization Library
//!
//! Canonicalizing codec between a terse markup notation and a flat tree of
//! element and text nodes.
//!
//! ## Notation
//!
//! - `<name>` is an empty element (no attributes, children or closing tag)
//! - anything else is text; outer whitespace of each text run is dropped
//! - rendered nodes are always separated by exactly one space
//!
//! ## Core Design
//!
//! ```text
//! "<a><b> c "  →  DomParser  →  DocumentTree  →  DomSerializer  →  "<a> <b> c"
//!                      ↘                               ↙
//!                         normalize (trim, names, spacing)
//! ```
//!
//! Canonical strings are fixed points: `serialize(&deserialize(s)?) == s`.

pub mod document;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod serializer;
pub mod types;

pub use document::DocumentTree;
pub use error::{ParseError, Result};
pub use parser::DomParser;
pub use serializer::DomSerializer;
pub use types::*;

/// Parse shorthand text into a document tree
pub fn deserialize(text: &str) -> Result<DocumentTree> {
    DomParser::new().parse(text)
}

/// Render a document tree as canonical shorthand text
pub fn serialize(tree: &DocumentTree) -> String {
    DomSerializer::new().serialize(tree)
}
