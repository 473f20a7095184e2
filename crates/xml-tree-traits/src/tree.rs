//! XML tree abstraction trait

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Processing instruction node
    ProcessingInstruction,
    /// Attribute node
    Attribute,
    /// Namespace node
    Namespace,
}

/// Trait for XML tree implementations.
///
/// This is the read-only capability set the query engine needs from a
/// parsed document: tag names, attribute maps, direct text and ordered
/// children. Implementations own their storage; `Node` is a lightweight
/// handle into it.
///
/// Handles handed out by one tree must only be passed back to that same
/// tree.
pub trait XmlTree: Send + Sync {
    /// Type representing a node handle in this tree
    type Node: Copy + Eq + Send + Sync + Debug;

    /// Parse XML from a string and return the document node
    fn parse_xml(&mut self, xml: &str) -> Result<Self::Node>;

    /// Get the document element (root element) of a document
    fn document_element(&self, doc: Self::Node) -> Result<Self::Node>;

    /// Get all children of a node, in document order
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Get all attributes of an element node as (name, value) pairs
    fn attributes(&self, node: Self::Node) -> Vec<(String, String)>;

    /// Get the local name of an element node
    fn node_name(&self, node: Self::Node) -> Option<String>;

    /// Get the direct text content of a node.
    ///
    /// For elements this is the concatenation of the element's own text
    /// children (not descendants); `None` when it has none.
    fn node_value(&self, node: Self::Node) -> Option<String>;

    /// Get the type of a node
    fn node_type(&self, node: Self::Node) -> NodeType;

    /// Serialize a node to an XML string
    fn serialize(&self, node: Self::Node) -> Result<String>;

    /// Get the element children of a node, in document order
    fn element_children(&self, node: Self::Node) -> Vec<Self::Node> {
        self.children(node)
            .into_iter()
            .filter(|child| self.node_type(*child) == NodeType::Element)
            .collect()
    }

    /// Get a single attribute value by name
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String> {
        self.attributes(node)
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Check whether an element has the given local name
    fn has_name(&self, node: Self::Node, name: &str) -> bool {
        self.node_name(node).as_deref() == Some(name)
    }
}
