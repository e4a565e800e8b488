//! Core node definitions
//!
//! Key design principles:
//! 1. Closed enum for nodes, so every match over them is exhaustive
//! 2. Validation happens in constructors; a built node holds its invariant,
//!    and deserialized nodes go through the same constructors
//! 3. Nodes own plain strings, no back-references

use crate::error::{ParseError, Result};
use crate::normalize;
use serde::{Deserialize, Serialize};

/// Node identifier (position in its document)
pub type NodeId = usize;

/// Node type, numbered as in the DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            3 => Some(NodeType::Text),
            _ => None,
        }
    }
}

/// An empty, unnested element written as `<name>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawElement")]
pub struct ElementNode {
    name: String,
}

impl ElementNode {
    /// Create an element, rejecting empty names and names with whitespace,
    /// `<` or `>`
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        normalize::validate_element_name(&name, 0)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A trimmed, non-empty run of text without `<`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawText")]
pub struct TextNode {
    content: String,
}

impl TextNode {
    /// Create a text node from a raw run, trimming its outer whitespace.
    /// Fails if nothing is left or the run contains `<`.
    pub fn new(run: &str) -> Result<Self> {
        let content = normalize::validate_text(run, 0)?;
        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// Wire shapes, checked by the constructors on the way in

#[derive(Deserialize)]
struct RawElement {
    name: String,
}

impl TryFrom<RawElement> for ElementNode {
    type Error = ParseError;

    fn try_from(raw: RawElement) -> Result<Self> {
        ElementNode::new(raw.name)
    }
}

#[derive(Deserialize)]
struct RawText {
    content: String,
}

impl TryFrom<RawText> for TextNode {
    type Error = ParseError;

    fn try_from(raw: RawText) -> Result<Self> {
        TextNode::new(&raw.content)
    }
}

/// Document node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
}

impl Node {
    /// Shorthand for `Node::Element(ElementNode::new(name)?)`
    pub fn element(name: impl Into<String>) -> Result<Self> {
        ElementNode::new(name).map(Node::Element)
    }

    /// Shorthand for `Node::Text(TextNode::new(run)?)`
    pub fn text(run: &str) -> Result<Self> {
        TextNode::new(run).map(Node::Text)
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
        }
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(ElementNode::name)
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}
