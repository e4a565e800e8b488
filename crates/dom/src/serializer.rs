//! DOM Serializer - render a document tree as canonical shorthand text
//!
//! Elements render as `<name>`, text renders as its content, and every two
//! neighbouring nodes are one space apart. Nodes only exist in valid form
//! (see [`crate::types`]), so rendering cannot fail, and its output parses
//! back to a tree that renders to the same string.

use crate::document::DocumentTree;
use crate::normalize::{self, TAG_CLOSE, TAG_OPEN};
use crate::types::{Node, NodeType};
use tracing::debug;

/// Stateless document tree serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSerializer;

impl DomSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize document to canonical shorthand text
    pub fn serialize(&self, document: &DocumentTree) -> String {
        let mut output = String::with_capacity(estimate_len(document));
        let mut prev: Option<NodeType> = None;

        for node in document {
            let kind = node.node_type();
            if let Some(prev) = prev {
                output.push(normalize::separator(prev, kind));
            }

            match node {
                Node::Element(element) => {
                    output.push(TAG_OPEN);
                    output.push_str(element.name());
                    output.push(TAG_CLOSE);
                }
                Node::Text(text) => output.push_str(text.content()),
            }
            prev = Some(kind);
        }

        debug!(
            nodes = document.len(),
            bytes = output.len(),
            "Serialized document"
        );
        output
    }
}

fn estimate_len(document: &DocumentTree) -> usize {
    document
        .iter()
        .map(|node| match node {
            Node::Element(element) => element.name().len() + 3,
            Node::Text(text) => text.content().len() + 1,
        })
        .sum()
}
