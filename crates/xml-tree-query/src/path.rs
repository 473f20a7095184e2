//! Explicit direct-child paths

use std::fmt;

/// An ordered chain of direct-child tag names, starting below a node.
///
/// The empty path addresses the starting node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<String>,
}

impl Path {
    /// The empty path
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from its steps, outermost first
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// The tag names of each step
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether this is the empty path addressing the start node
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step, returning the extended path
    pub fn child(mut self, tag: impl Into<String>) -> Self {
        self.steps.push(tag.into());
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.join("/"))
    }
}

impl From<&str> for Path {
    fn from(tag: &str) -> Self {
        Self::new([tag])
    }
}

impl From<String> for Path {
    fn from(tag: String) -> Self {
        Self::new([tag])
    }
}

impl From<&[&str]> for Path {
    fn from(steps: &[&str]) -> Self {
        Self::new(steps.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(steps: [&str; N]) -> Self {
        Self::new(steps)
    }
}

impl From<Vec<&str>> for Path {
    fn from(steps: Vec<&str>) -> Self {
        Self::new(steps)
    }
}

impl From<Vec<String>> for Path {
    fn from(steps: Vec<String>) -> Self {
        Self { steps }
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}
