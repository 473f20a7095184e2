//! Document-order traversal

use xml_tree_traits::XmlTree;

/// Pre-order walk over an element and all of its element descendants.
///
/// Uses an explicit stack so arbitrarily deep trees cannot exhaust the call
/// stack. Children are pushed in reverse so they pop in document order.
pub(crate) struct Descendants<'a, T: XmlTree> {
    tree: &'a T,
    stack: Vec<T::Node>,
}

impl<'a, T: XmlTree> Descendants<'a, T> {
    pub(crate) fn new(tree: &'a T, start: T::Node) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl<T: XmlTree> Iterator for Descendants<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let children = self.tree.element_children(node);
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}
