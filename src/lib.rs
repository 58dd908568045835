//! # `undigraph` - Value-Keyed Undirected Graphs
//!
//! An in-memory undirected graph whose nodes are identified by their value,
//! with path-carrying breadth-first and depth-first search and
//! connected-component analysis.
//!
//! ## Model
//!
//! - **Nodes** are unique values kept in insertion order. Each node owns an
//!   ordered list of neighbours, also in insertion order, without duplicates.
//! - **Edges** are undirected: an edge is recorded at both endpoints, and every
//!   mutation keeps the two records in step.
//! - **Snapshots** ([`NodeSnapshot`]) are owned copies of a node and its
//!   neighbour values, independent of the graph they came from.
//!
//! ## Signalling
//!
//! Nothing in the public API panics on user input:
//!
//! | Situation | Plain API | Checked API |
//! |-----------|-----------|-------------|
//! | Mutation referencing a missing node | no-op | `Err(GraphError::MissingNode)` |
//! | Redundant edge add/remove, duplicate node | no-op | `Err(..)` |
//! | `remove_node` on a missing node | `None` | `Err(GraphError::MissingNode)` |
//! | Search with a missing endpoint | `None` | n/a |
//! | Search between disconnected nodes | `Some(vec![])` | n/a |
//!
//! ## Features
//!
//! - `tracing` (default): emits `tracing` events for no-op mutations, node
//!   removal and search outcomes.
//!
//! ## Example
//!
//! ```rust
//! use undigraph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::from_edges([(1, 2), (2, 4), (1, 3), (4, 3), (3, 5)]);
//! graph.add_node(10);
//!
//! assert_eq!(graph.bf_search(&1, &5), Some(vec![1, 3, 5]));
//! assert_eq!(graph.bf_search(&1, &10), Some(vec![]));
//! assert_eq!(graph.bf_search(&1, &99), None);
//! assert_eq!(graph.number_clusters(), 2);
//!
//! let removed = graph.remove_node(&3).unwrap();
//! assert_eq!(removed.neighbours, vec![1, 4, 5]);
//! assert_eq!(graph.number_clusters(), 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
pub mod graph;
mod trace;

pub use error::GraphError;
pub use graph::{GraphStatistics, NodeRef, NodeSnapshot, SearchStrategy, UndirectedGraph};

// Compile-time assertions on the public types.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<UndirectedGraph<u64>>();
    assert_send_sync::<NodeSnapshot<u64>>();
    assert_send_sync::<GraphError<u64>>();
};
