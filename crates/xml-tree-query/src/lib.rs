//! xml-tree-query: fluent queries over a parsed XML tree
//!
//! A [`TreeQuery`] wraps an element of a parsed document and answers three
//! kinds of questions about it:
//!
//! - **Paths**: follow an explicit chain of direct children and read a value
//!   or attribute. A broken chain is an error naming the missing tag.
//! - **Searches**: find the first (or every) element with a tag anywhere
//!   below the root, optionally filtered by an attribute [`Condition`]. A
//!   miss is `None` or an empty `Vec`.
//! - **Sub-trees**: get new handles scoped to matched elements.
//!
//! # Quick Start
//!
//! ```rust
//! use xml_tree_query::{Condition, TreeQuery};
//!
//! let query = TreeQuery::from_xml(
//!     r#"<xml id="33"><content><extra name="zizoo" id="1"/></content></xml>"#,
//! )?;
//!
//! assert_eq!(query.attribute("id").as_deref(), Some("33"));
//! assert_eq!(
//!     query
//!         .find_attribute_where("name", &Condition::new().eq("id", 1), Some("extra"))
//!         .as_deref(),
//!     Some("zizoo")
//! );
//! # Ok::<(), xml_tree_query::Error>(())
//! ```

pub mod condition;
pub mod path;
pub mod query;
pub mod record;

mod walk;

// Re-export core types
pub use condition::{Clause, Condition, Operator};
pub use path::Path;
pub use query::TreeQuery;
pub use record::AttributeRecord;

// Re-export the tree abstraction and default parser
pub use xml_tree_traits::{Error, NodeType, Result, XmlTree};
pub use xot_adapter::XotTree;
