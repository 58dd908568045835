//! Path-carrying breadth-first and depth-first search.
//!
//! The frontier stores whole candidate paths rather than single nodes, so a
//! successful search can hand back the path it popped without rebuilding it
//! from predecessor links. A node may sit at the tail of several queued
//! paths before it is first expanded; those extra paths are discarded when
//! popped.
//!
//! The two searches differ only in the frontier: a FIFO [`PathQueue`] gives
//! breadth-first order (and therefore a shortest path), a LIFO [`PathStack`]
//! gives depth-first order.

use core::fmt;
use std::collections::VecDeque;
use std::hash::Hash;

use super::undirected::UndirectedGraph;
use crate::graph::access::visited::VisitedFlags;
use crate::trace::debug_event;

/// A candidate path, as arena slots from the source onwards.
type SlotPath = Vec<usize>;

/// Container of in-progress candidate paths.
pub(crate) trait Frontier: Default {
    fn push(&mut self, path: SlotPath);
    fn pop(&mut self) -> Option<SlotPath>;
}

/// FIFO frontier used by breadth-first search.
#[derive(Default)]
pub(crate) struct PathQueue(VecDeque<SlotPath>);

impl Frontier for PathQueue {
    #[inline]
    fn push(&mut self, path: SlotPath) {
        self.0.push_back(path);
    }

    #[inline]
    fn pop(&mut self) -> Option<SlotPath> {
        self.0.pop_front()
    }
}

/// LIFO frontier used by depth-first search.
#[derive(Default)]
pub(crate) struct PathStack(Vec<SlotPath>);

impl Frontier for PathStack {
    #[inline]
    fn push(&mut self, path: SlotPath) {
        self.0.push(path);
    }

    #[inline]
    fn pop(&mut self) -> Option<SlotPath> {
        self.0.pop()
    }
}

/// Order in which [`UndirectedGraph::search`] expands candidate paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Expand the oldest path first. Finds a path with the fewest edges.
    BreadthFirst,
    /// Expand the newest path first.
    DepthFirst,
}

impl<T: Clone + Eq + Hash + fmt::Debug> UndirectedGraph<T> {
    /// Finds a path from `source` to `destination` by breadth-first search.
    ///
    /// Returns:
    /// - `None` if either endpoint is not in the graph
    /// - `Some(vec![])` if both exist but are not connected
    /// - `Some(path)` otherwise, starting at `source` and ending at `destination`
    pub fn bf_search(&self, source: &T, destination: &T) -> Option<Vec<T>> {
        self.search(SearchStrategy::BreadthFirst, source, destination)
    }

    /// Finds a path from `source` to `destination` by depth-first search.
    ///
    /// Same return contract as [`bf_search`](Self::bf_search); the path need
    /// not be the shortest.
    pub fn df_search(&self, source: &T, destination: &T) -> Option<Vec<T>> {
        self.search(SearchStrategy::DepthFirst, source, destination)
    }

    /// Finds a path from `source` to `destination` using `strategy`.
    pub fn search(&self, strategy: SearchStrategy, source: &T, destination: &T) -> Option<Vec<T>> {
        let Some(s) = self.slot_of(source) else {
            debug_event!(?strategy, source = ?source, "search source is not in the graph");
            return None;
        };
        let Some(d) = self.slot_of(destination) else {
            debug_event!(?strategy, destination = ?destination, "search destination is not in the graph");
            return None;
        };

        let path = match strategy {
            SearchStrategy::BreadthFirst => self.path_search::<PathQueue>(s, d),
            SearchStrategy::DepthFirst => self.path_search::<PathStack>(s, d),
        }
        .unwrap_or_default();

        debug_event!(?strategy, len = path.len(), "search finished");
        Some(
            path.into_iter()
                .map(|slot| self.nodes[slot].value.clone())
                .collect(),
        )
    }

    fn path_search<F: Frontier>(&self, source: usize, destination: usize) -> Option<SlotPath> {
        let mut visited = VisitedFlags::new(self.nodes.len());
        let mut frontier = F::default();
        frontier.push(vec![source]);

        while let Some(path) = frontier.pop() {
            let Some(&tail) = path.last() else {
                continue;
            };
            if tail == destination {
                return Some(path);
            }
            if !visited.try_visit(tail) {
                continue;
            }

            for &neighbour in &self.nodes[tail].edges {
                if visited.is_visited(neighbour) {
                    continue;
                }
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(neighbour);
                frontier.push(next);
            }
        }

        None
    }
}
