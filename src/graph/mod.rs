//! Graph layouts and traversals.
//!
//! - `basic`: the value-keyed undirected graph and its algorithms
//! - `access`: crate-internal traversal scratch state

pub mod basic;
pub(crate) mod access;

pub use basic::{GraphStatistics, NodeRef, NodeSnapshot, SearchStrategy, UndirectedGraph};
