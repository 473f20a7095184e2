//! XmlTree implementation for xot

use tracing::debug;
use xml_tree_traits::{
    error::{Error, Result},
    tree::{NodeType, XmlTree},
};
use xot::{Node, Xot};

/// Wrapper around Xot that implements the XmlTree trait
#[derive(Debug)]
pub struct XotTree {
    pub(crate) xot: Xot,
}

impl XotTree {
    /// Create a new, empty XotTree
    pub fn new() -> Self {
        Self { xot: Xot::new() }
    }

    /// Get a reference to the underlying Xot
    pub fn xot(&self) -> &Xot {
        &self.xot
    }
}

impl Default for XotTree {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTree for XotTree {
    type Node = Node;

    fn parse_xml(&mut self, xml: &str) -> Result<Self::Node> {
        debug!(bytes = xml.len(), "parsing xml document");
        self.xot
            .parse(xml)
            .map_err(|e| Error::XmlParse(e.to_string()))
    }

    fn document_element(&self, doc: Self::Node) -> Result<Self::Node> {
        self.xot
            .document_element(doc)
            .map_err(|e| Error::NodeAccess(e.to_string()))
    }

    fn children(&self, node: Self::Node) -> Vec<Self::Node> {
        self.xot.children(node).collect()
    }

    fn attributes(&self, node: Self::Node) -> Vec<(String, String)> {
        if !self.xot.is_element(node) {
            return Vec::new();
        }
        self.xot
            .attributes(node)
            .iter()
            .map(|(name, value)| {
                let name_str = self.xot.local_name_str(name).to_string();
                (name_str, value.to_string())
            })
            .collect()
    }

    fn node_name(&self, node: Self::Node) -> Option<String> {
        if !self.xot.is_element(node) {
            return None;
        }
        self.xot
            .node_name(node)
            .map(|name| self.xot.local_name_str(name).to_string())
    }

    fn node_value(&self, node: Self::Node) -> Option<String> {
        match self.xot.value(node) {
            xot::Value::Text(text) => Some(text.get().to_string()),
            xot::Value::Element(_) => {
                // Own text children only, like SimpleXML's string cast
                let mut content: Option<String> = None;
                for child in self.xot.children(node) {
                    if let xot::Value::Text(text) = self.xot.value(child) {
                        content.get_or_insert_with(String::new).push_str(text.get());
                    }
                }
                content
            }
            _ => None,
        }
    }

    fn node_type(&self, node: Self::Node) -> NodeType {
        match self.xot.value_type(node) {
            xot::ValueType::Document => NodeType::Document,
            xot::ValueType::Element => NodeType::Element,
            xot::ValueType::Text => NodeType::Text,
            xot::ValueType::Comment => NodeType::Comment,
            xot::ValueType::ProcessingInstruction => NodeType::ProcessingInstruction,
            xot::ValueType::Attribute => NodeType::Attribute,
            xot::ValueType::Namespace => NodeType::Namespace,
        }
    }

    fn serialize(&self, node: Self::Node) -> Result<String> {
        self.xot
            .to_string(node)
            .map_err(|e| Error::Serialize(e.to_string()))
    }
}
