//! Core trait abstractions for queryable XML trees.
//!
//! This crate defines the node capability set that a parser must expose
//! to be driven by the `xml-tree-query` engine, plus the error type shared
//! by every crate in the workspace.

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{NodeType, XmlTree};
