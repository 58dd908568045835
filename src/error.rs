//! Error type for the checked graph operations.
//!
//! The unchecked operations (`add_edge`, `remove_edge`, ...) swallow these
//! errors and leave the graph unchanged; the `try_*` variants surface them.

use core::fmt;

/// The reason a checked graph operation made no change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<T> {
    /// The value is not a node of the graph.
    MissingNode(T),
    /// The value is already a node of the graph.
    DuplicateNode(T),
    /// The two nodes already share an edge.
    AlreadyAdjacent(T, T),
    /// The two nodes do not share an edge.
    NotAdjacent(T, T),
    /// An internal consistency check failed.
    Inconsistent(String),
}

impl<T: fmt::Debug> fmt::Display for GraphError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(value) => write!(f, "node {value:?} is not in the graph"),
            Self::DuplicateNode(value) => write!(f, "node {value:?} is already in the graph"),
            Self::AlreadyAdjacent(a, b) => write!(f, "nodes {a:?} and {b:?} are already adjacent"),
            Self::NotAdjacent(a, b) => write!(f, "nodes {a:?} and {b:?} are not adjacent"),
            Self::Inconsistent(reason) => write!(f, "graph invariant violated: {reason}"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for GraphError<T> {}
