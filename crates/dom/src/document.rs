//! Ordered node storage for one parsed document
//!
//! A document is a flat sequence: nodes are stored in reading order and
//! addressed by their position.
//!
//! ```text
//! "<a> b <c>"  →  [Element a][Text b][Element c]
//!                  ↑ NodeId 0  ↑ 1    ↑ 2
//! ```

use crate::error::Result;
use crate::parser::DomParser;
use crate::serializer::DomSerializer;
use crate::types::{ElementNode, Node, NodeId, TextNode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root container of a single parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTree {
    nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create a new empty document
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create document with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Parse shorthand text into a document
    pub fn deserialize(input: &str) -> Result<Self> {
        DomParser::new().parse(input)
    }

    /// Render canonical shorthand text
    pub fn serialize(&self) -> String {
        DomSerializer::new().serialize(self)
    }

    /// Append a node, returns its ID
    pub fn append(&mut self, node: Node) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(node);
        node_id
    }

    pub fn get(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(Node::as_text)
    }

    /// Find nodes matching predicate
    pub fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| predicate(node).then_some(idx))
            .collect()
    }

    /// Find all elements with exactly this name
    pub fn find_by_name(&self, name: &str) -> Vec<NodeId> {
        self.find(|node| node.tag_name() == Some(name))
    }

    /// All text contents, one space apart
    pub fn text_content(&self) -> String {
        self.texts()
            .map(TextNode::content)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for DocumentTree {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

impl fmt::Display for DocumentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromIterator<Node> for DocumentTree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for DocumentTree {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DocumentTree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for DocumentTree {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
