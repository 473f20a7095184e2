//! xot adapter for the XML tree abstraction
//!
//! This adapter wraps the xot XML library to implement the
//! xml-tree-traits interfaces, acting as the parser collaborator
//! for the query engine.

pub mod tree;

// Re-export main types
pub use tree::XotTree;

// Re-export key types for convenience
pub use xot::Node;
