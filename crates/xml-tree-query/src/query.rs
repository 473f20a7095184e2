//! The TreeQuery engine
//!
//! Explicit paths ([`TreeQuery::get_value`], [`TreeQuery::get_attribute`])
//! walk direct children only and fail with [`Error::PathNotFound`] naming the
//! first step that did not resolve. Searches (`find_*`, `get_element*`)
//! cover the handle's root and every element below it in document order and
//! report a miss as `None` or an empty `Vec`.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use xml_tree_traits::error::{Error, Result};
use xml_tree_traits::XmlTree;
use xot_adapter::XotTree;

use crate::condition::Condition;
use crate::path::Path;
use crate::record::AttributeRecord;
use crate::walk::Descendants;

/// Query handle over an element of a parsed XML tree.
///
/// Handles returned by [`get_element`](Self::get_element) and
/// [`get_elements`](Self::get_elements) share the underlying tree with the
/// handle they came from; they only move the root. Nothing in this API
/// mutates the tree, but any mutation made through another owner of the
/// same tree is visible through every handle addressing it.
pub struct TreeQuery<T: XmlTree = XotTree> {
    tree: Arc<T>,
    root: T::Node,
    source: Option<Arc<str>>,
}

impl TreeQuery<XotTree> {
    /// Parse markup with the xot parser and query its document element
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::parse_with(XotTree::new(), xml)
    }
}

impl<T: XmlTree> TreeQuery<T> {
    /// Parse markup with the given tree implementation
    pub fn parse_with(mut tree: T, xml: &str) -> Result<Self> {
        let doc = tree.parse_xml(xml)?;
        let root = tree.document_element(doc)?;
        Ok(Self {
            tree: Arc::new(tree),
            root,
            source: Some(Arc::from(xml)),
        })
    }

    /// Wrap an existing node of a shared tree
    pub fn from_node(tree: Arc<T>, node: T::Node) -> Self {
        Self {
            tree,
            root: node,
            source: None,
        }
    }

    fn scoped(&self, node: T::Node) -> Self {
        Self::from_node(Arc::clone(&self.tree), node)
    }

    /// Get the node handle this query is scoped to
    pub fn root(&self) -> T::Node {
        self.root
    }

    /// Get a reference to the underlying tree
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Get a shared handle to the underlying tree
    pub fn shared_tree(&self) -> Arc<T> {
        Arc::clone(&self.tree)
    }

    /// The markup this handle was parsed from.
    ///
    /// Handles not created by parsing re-serialize their root, so the
    /// original formatting is not reproduced for them.
    pub fn xml(&self) -> Result<String> {
        match &self.source {
            Some(source) => Ok(source.to_string()),
            None => self.tree.serialize(self.root),
        }
    }

    /// Local name of the root element
    pub fn tag_name(&self) -> Option<String> {
        self.tree.node_name(self.root)
    }

    /// Text content of the root element, empty when it has none
    pub fn value(&self) -> String {
        self.text_of(self.root)
    }

    /// Read an attribute directly off the root element
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.tree.attribute(self.root, name)
    }

    /// Every attribute of the root element
    pub fn attributes(&self) -> AttributeRecord {
        self.tree.attributes(self.root).into_iter().collect()
    }

    // ==================== Path Navigation ====================

    fn resolve(&self, path: &Path) -> Result<T::Node> {
        let mut current = self.root;
        for step in path.steps() {
            current = self
                .tree
                .element_children(current)
                .into_iter()
                .find(|child| self.tree.has_name(*child, step))
                .ok_or_else(|| {
                    debug!(tag = %step, path = %path, "path step did not resolve");
                    Error::path_not_found(step.as_str())
                })?;
        }
        Ok(current)
    }

    /// Text content of the node at `path`, descending one direct child per step
    pub fn get_value(&self, path: impl Into<Path>) -> Result<String> {
        let node = self.resolve(&path.into())?;
        Ok(self.text_of(node))
    }

    /// Attribute of the node at `path`; pass [`Path::root`] to read the root.
    ///
    /// A missing attribute is `Ok(None)`; only a broken path is an error.
    pub fn get_attribute(&self, name: &str, path: impl Into<Path>) -> Result<Option<String>> {
        let node = self.resolve(&path.into())?;
        Ok(self.tree.attribute(node, name))
    }

    // ==================== Recursive Search ====================

    fn descendants(&self) -> Descendants<'_, T> {
        Descendants::new(self.tree.as_ref(), self.root)
    }

    fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = T::Node> + 'a {
        self.descendants()
            .filter(move |node| self.tree.has_name(*node, tag))
    }

    fn first_tagged(&self, tag: &str) -> Option<T::Node> {
        self.tagged(tag).next()
    }

    fn text_of(&self, node: T::Node) -> String {
        self.tree.node_value(node).unwrap_or_default()
    }

    fn has_all(attributes: &[(String, String)], names: &[&str]) -> bool {
        names
            .iter()
            .all(|name| attributes.iter().any(|(key, _)| key == name))
    }

    fn pick(attributes: Vec<(String, String)>, names: &[&str]) -> AttributeRecord {
        let mut record = AttributeRecord::new();
        for (key, value) in attributes {
            if names.contains(&key.as_str()) {
                record.insert(key, value);
            }
        }
        record
    }

    /// Text content of the first element named `tag`, anywhere in the tree
    pub fn find_value(&self, tag: &str) -> Option<String> {
        trace!(tag, "find_value");
        self.first_tagged(tag).map(|node| self.text_of(node))
    }

    /// Attribute `name` of the first element named `tag`, or of the first
    /// element carrying `name` at all when no tag is given
    pub fn find_attribute(&self, name: &str, tag: Option<&str>) -> Option<String> {
        trace!(attribute = name, ?tag, "find_attribute");
        match tag {
            Some(tag) => self
                .first_tagged(tag)
                .and_then(|node| self.tree.attribute(node, name)),
            None => self
                .descendants()
                .find_map(|node| self.tree.attribute(node, name)),
        }
    }

    /// Attribute `name` of the first element (named `tag`, if given) whose
    /// attributes satisfy `condition`
    pub fn find_attribute_where(
        &self,
        name: &str,
        condition: &Condition,
        tag: Option<&str>,
    ) -> Option<String> {
        trace!(attribute = name, %condition, ?tag, "find_attribute_where");
        self.descendants()
            .filter(|node| match tag {
                Some(tag) => self.tree.has_name(*node, tag),
                None => true,
            })
            .map(|node| self.tree.attributes(node))
            .find(|attributes| condition.matches(attributes))
            .and_then(|attributes| {
                attributes
                    .into_iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value)
            })
    }

    /// The requested attributes of the first element named `tag`, or of the
    /// first element carrying all of `names` when no tag is given
    pub fn find_attributes(&self, names: &[&str], tag: Option<&str>) -> Option<AttributeRecord> {
        trace!(?names, ?tag, "find_attributes");
        let attributes = match tag {
            Some(tag) => self
                .first_tagged(tag)
                .map(|node| self.tree.attributes(node)),
            None => self
                .descendants()
                .map(|node| self.tree.attributes(node))
                .find(|attributes| Self::has_all(attributes, names)),
        }?;
        Some(Self::pick(attributes, names))
    }

    /// Like [`find_attributes`](Self::find_attributes), but the candidate
    /// must also satisfy `condition`
    pub fn find_attributes_where(
        &self,
        names: &[&str],
        condition: &Condition,
        tag: Option<&str>,
    ) -> Option<AttributeRecord> {
        trace!(?names, %condition, ?tag, "find_attributes_where");
        let attributes = self
            .descendants()
            .filter(|node| match tag {
                Some(tag) => self.tree.has_name(*node, tag),
                None => true,
            })
            .map(|node| self.tree.attributes(node))
            .find(|attributes| {
                (tag.is_some() || Self::has_all(attributes, names)) && condition.matches(attributes)
            })?;
        Some(Self::pick(attributes, names))
    }

    /// Full attribute records of every element named `tag`, in document order
    pub fn find_all_attributes_of(&self, tag: &str) -> Vec<AttributeRecord> {
        let records: Vec<AttributeRecord> = self
            .tagged(tag)
            .map(|node| self.tree.attributes(node).into_iter().collect())
            .collect();
        trace!(tag, count = records.len(), "find_all_attributes_of");
        records
    }

    /// Full attribute records of every element named `tag` that satisfies
    /// `condition`, in document order
    pub fn find_all_attributes_of_where(
        &self,
        tag: &str,
        condition: &Condition,
    ) -> Vec<AttributeRecord> {
        let records: Vec<AttributeRecord> = self
            .tagged(tag)
            .map(|node| self.tree.attributes(node))
            .filter(|attributes| condition.matches(attributes))
            .map(|attributes| attributes.into_iter().collect())
            .collect();
        trace!(tag, %condition, count = records.len(), "find_all_attributes_of_where");
        records
    }

    // ==================== Sub-tree Extraction ====================

    /// Handle scoped to the first element named `tag`
    pub fn get_element(&self, tag: &str) -> Option<Self> {
        trace!(tag, "get_element");
        self.first_tagged(tag).map(|node| self.scoped(node))
    }

    /// Handles scoped to every element named `tag`, in document order
    pub fn get_elements(&self, tag: &str) -> Vec<Self> {
        let elements: Vec<Self> = self.tagged(tag).map(|node| self.scoped(node)).collect();
        trace!(tag, count = elements.len(), "get_elements");
        elements
    }
}

impl<T: XmlTree> Clone for TreeQuery<T> {
    fn clone(&self) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            root: self.root,
            source: self.source.clone(),
        }
    }
}

impl<T: XmlTree> PartialEq for TreeQuery<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.root == other.root
    }
}

impl<T: XmlTree> Eq for TreeQuery<T> {}

impl<T: XmlTree> fmt::Debug for TreeQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeQuery")
            .field("root", &self.root)
            .field("tag", &self.tag_name())
            .finish()
    }
}
