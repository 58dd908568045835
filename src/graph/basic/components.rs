//! Connected components.
//!
//! Components are found by seeding a flood fill from every not-yet-visited
//! node, in insertion order. The flood fill uses an explicit stack, so
//! component size is not limited by the call stack.

use core::fmt;
use std::hash::Hash;

use super::undirected::UndirectedGraph;
use crate::graph::access::visited::VisitedFlags;

impl<T: Clone + Eq + Hash + fmt::Debug> UndirectedGraph<T> {
    /// Returns the number of connected components.
    ///
    /// An edgeless graph of `n` nodes has `n` components; an empty graph has none.
    pub fn number_clusters(&self) -> usize {
        self.flood_fill(|_, _| {})
    }

    /// Returns the connected components.
    ///
    /// Components are ordered by the insertion position of their first node;
    /// within a component, nodes appear in the order the flood fill reached them.
    pub fn clusters(&self) -> Vec<Vec<T>> {
        let mut clusters: Vec<Vec<T>> = Vec::new();
        self.flood_fill(|cluster, slot| {
            if cluster == clusters.len() {
                clusters.push(Vec::new());
            }
            clusters[cluster].push(self.nodes[slot].value.clone());
        });
        clusters
    }

    /// Visits every node exactly once, reporting `(cluster, slot)` as each is
    /// reached. Returns the number of clusters.
    fn flood_fill<F>(&self, mut reached: F) -> usize
    where
        F: FnMut(usize, usize),
    {
        let mut visited = VisitedFlags::new(self.nodes.len());
        let mut stack = Vec::new();
        let mut clusters = 0;

        for seed in 0..self.nodes.len() {
            if visited.is_complete() {
                break;
            }
            if !visited.try_visit(seed) {
                continue;
            }

            reached(clusters, seed);
            stack.push(seed);
            while let Some(slot) = stack.pop() {
                for &neighbour in &self.nodes[slot].edges {
                    if visited.try_visit(neighbour) {
                        reached(clusters, neighbour);
                        stack.push(neighbour);
                    }
                }
            }
            clusters += 1;
        }

        clusters
    }
}
