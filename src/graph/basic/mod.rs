//! Basic graph implementations.
//!
//! `undirected` holds the storage and mutation API; `search` and `components`
//! add the traversal algorithms as further `impl` blocks on the same type.

pub mod components;
pub mod node;
pub mod search;
pub mod undirected;

pub use node::{NodeRef, NodeSnapshot};
pub use search::SearchStrategy;
pub use undirected::{GraphStatistics, UndirectedGraph};
