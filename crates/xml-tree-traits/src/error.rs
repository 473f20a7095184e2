//! Error types for XML tree queries


/// Result type for XML tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for parsing and querying XML trees
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// An explicit path step has no matching direct child
    #[error("Tag \"{tag}\" doesn't exist in the provided xml")]
    PathNotFound {
        /// The first path step that could not be resolved
        tag: String,
    },

    /// A condition could not be normalized into clauses
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// Node access error
    #[error("Node access error: {0}")]
    NodeAccess(String),

    /// Serialization back to markup failed
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Create a new parse error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new path error for the given unresolved tag
    pub fn path_not_found<S: Into<String>>(tag: S) -> Self {
        Error::PathNotFound { tag: tag.into() }
    }

    /// Create a new condition error
    pub fn invalid_condition<S: Into<String>>(msg: S) -> Self {
        Error::InvalidCondition(msg.into())
    }

    /// The unresolved tag carried by a path error, if this is one
    pub fn missing_tag(&self) -> Option<&str> {
        match self {
            Error::PathNotFound { tag } => Some(tag),
            _ => None,
        }
    }
}
