//! A dynamic, value-keyed undirected graph.
//!
//! Nodes live in an insertion-ordered arena (`Vec<Node<T>>`) and refer to
//! their neighbours by slot. A `HashMap<T, usize>` maps each value to its
//! slot, so lookups by value are \(O(1)\) while full scans still run in
//! insertion order.
//!
//! Every edge is stored twice, once in each endpoint's edge list. All
//! mutations keep both copies in step, and node removal renumbers the slots
//! above the removed one so the arena never contains holes.

use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;

use super::node::{Node, NodeRef, NodeSnapshot};
use crate::error::GraphError;
use crate::trace::{debug_event, trace_event};

/// An undirected graph whose nodes are identified by their value.
///
/// Malformed mutations (a missing endpoint, a duplicate node, an edge that
/// already exists or does not exist) leave the graph unchanged. The plain
/// methods swallow the reason; the `try_*` methods return it as a
/// [`GraphError`].
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `contains_node` | \(O(1)\) | Hash lookup |
/// | `add_node` | \(O(1)\) amortized | Appends to the arena |
/// | `add_edge` | \(O(\deg)\) | Checks for an existing edge first |
/// | `remove_edge` | \(O(\deg)\) | Linear scan of both edge lists |
/// | `remove_node` | \(O(n + m)\) | Renumbers every slot above the removed node |
/// | `bf_search` / `df_search` | \(O(m \cdot L)\) | Frontier carries whole paths of length up to \(L\) |
/// | `number_clusters` | \(O(n + m)\) | Iterative flood fill |
pub struct UndirectedGraph<T> {
    pub(crate) nodes: Vec<Node<T>>,
    index: HashMap<T, usize>,
}

impl<T> UndirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes.
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges. A self-loop counts as one edge.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| node.edges.iter().filter(|&&s| s >= slot).count())
            .sum()
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        (0..self.nodes.len()).map(move |slot| NodeRef::new(&self.nodes, slot))
    }

    /// Iterates over all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> UndirectedGraph<T> {
    /// Builds a graph from an edge list, adding endpoints as they are first seen.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        for (source, destination) in edges {
            if !graph.contains_node(&source) {
                graph.add_node(source.clone());
            }
            if !graph.contains_node(&destination) {
                graph.add_node(destination.clone());
            }
            graph.add_edge(&source, &destination);
        }
        graph
    }

    #[inline]
    pub(crate) fn slot_of(&self, value: &T) -> Option<usize> {
        self.index.get(value).copied()
    }

    fn require(&self, value: &T) -> Result<usize, GraphError<T>> {
        self.slot_of(value)
            .ok_or_else(|| GraphError::MissingNode(value.clone()))
    }

    /// Returns `true` if `value` is a node of the graph.
    pub fn contains_node(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns a read-only view of the node holding `value`.
    pub fn node(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.slot_of(value).map(|slot| NodeRef::new(&self.nodes, slot))
    }

    /// Returns an owned copy of the node holding `value`.
    pub fn snapshot(&self, value: &T) -> Option<NodeSnapshot<T>> {
        self.node(value).map(|node| node.to_snapshot())
    }

    /// Returns the neighbours of `value` in edge insertion order.
    pub fn neighbours(&self, value: &T) -> Option<impl Iterator<Item = &T> + '_> {
        self.node(value).map(|node| node.neighbours())
    }

    /// Returns the number of edges incident to `value`.
    pub fn degree(&self, value: &T) -> Option<usize> {
        self.node(value).map(|node| node.degree())
    }

    /// Returns `true` if both values are nodes and share an edge.
    pub fn are_adjacent(&self, a: &T, b: &T) -> bool {
        match (self.slot_of(a), self.slot_of(b)) {
            (Some(sa), Some(sb)) => self.nodes[sa].links_to(sb),
            _ => false,
        }
    }

    /// Adds a node holding `value`. Does nothing if the value is already present.
    pub fn add_node(&mut self, value: T) {
        Self::discard("add_node", self.try_add_node(value));
    }

    /// Adds a node holding `value`.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the value is already present.
    pub fn try_add_node(&mut self, value: T) -> Result<(), GraphError<T>> {
        if self.index.contains_key(&value) {
            return Err(GraphError::DuplicateNode(value));
        }

        let slot = self.nodes.len();
        self.index.insert(value.clone(), slot);
        self.nodes.push(Node::new(value));
        self.debug_assert_slot(slot);
        Ok(())
    }

    /// Connects `source` and `destination`.
    ///
    /// Does nothing if either node is missing or the two are already adjacent.
    pub fn add_edge(&mut self, source: &T, destination: &T) {
        Self::discard("add_edge", self.try_add_edge(source, destination));
    }

    /// Connects `source` and `destination`.
    ///
    /// A self-loop (`source == destination`) is recorded once in the node's
    /// own edge list.
    pub fn try_add_edge(&mut self, source: &T, destination: &T) -> Result<(), GraphError<T>> {
        let s = self.require(source)?;
        let d = self.require(destination)?;

        // One direction suffices: edges are mutual.
        if self.nodes[s].links_to(d) {
            return Err(GraphError::AlreadyAdjacent(
                source.clone(),
                destination.clone(),
            ));
        }

        self.nodes[s].edges.push(d);
        if s != d {
            self.nodes[d].edges.push(s);
        }
        self.debug_assert_slot(s);
        self.debug_assert_slot(d);
        Ok(())
    }

    /// Disconnects `source` and `destination`.
    ///
    /// Does nothing if either node is missing or the two are not adjacent.
    pub fn remove_edge(&mut self, source: &T, destination: &T) {
        Self::discard("remove_edge", self.try_remove_edge(source, destination));
    }

    /// Disconnects `source` and `destination`.
    pub fn try_remove_edge(&mut self, source: &T, destination: &T) -> Result<(), GraphError<T>> {
        let s = self.require(source)?;
        let d = self.require(destination)?;

        if !self.disconnect(s, d) {
            return Err(GraphError::NotAdjacent(source.clone(), destination.clone()));
        }
        self.debug_assert_slot(s);
        self.debug_assert_slot(d);
        Ok(())
    }

    /// Removes the edge between two slots from both edge lists.
    fn disconnect(&mut self, s: usize, d: usize) -> bool {
        if !self.nodes[s].unlink(d) {
            return false;
        }
        if s != d {
            let unlinked = self.nodes[d].unlink(s);
            debug_assert!(unlinked, "edge {s}-{d} was not mutual");
        }
        true
    }

    /// Removes the node holding `value` along with all its edges.
    ///
    /// Returns a snapshot of the node as it was before removal, or `None` if
    /// the value is not in the graph.
    pub fn remove_node(&mut self, value: &T) -> Option<NodeSnapshot<T>> {
        match self.try_remove_node(value) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                Self::discard::<()>("remove_node", Err(error));
                None
            }
        }
    }

    /// Removes the node holding `value` along with all its edges.
    ///
    /// Fails with [`GraphError::MissingNode`] if the value is not in the graph.
    pub fn try_remove_node(&mut self, value: &T) -> Result<NodeSnapshot<T>, GraphError<T>> {
        let slot = self.require(value)?;
        let snapshot = NodeRef::new(&self.nodes, slot).to_snapshot();

        // Each disconnect also strips one entry from the target's own list.
        let neighbours = self.nodes[slot].edges.clone();
        for neighbour in neighbours {
            self.disconnect(neighbour, slot);
        }
        debug_assert!(self.nodes[slot].edges.is_empty());

        self.excise(slot);
        debug_event!(value = ?snapshot.value, degree = snapshot.degree(), "node removed");
        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Ok(snapshot)
    }

    /// Drops an edgeless node from the arena and shifts every slot above it down by one.
    fn excise(&mut self, slot: usize) {
        let node = self.nodes.remove(slot);
        self.index.remove(&node.value);

        for node in &mut self.nodes {
            for s in &mut node.edges {
                if *s > slot {
                    *s -= 1;
                }
            }
        }
        for s in self.index.values_mut() {
            if *s > slot {
                *s -= 1;
            }
        }
    }

    /// Verifies the structural invariants of the graph.
    ///
    /// Checks that:
    /// 1. `nodes` and `index` hold the same values at the same slots
    /// 2. every edge points at a slot inside the arena
    /// 3. no edge list contains the same neighbour twice
    /// 4. every edge is recorded at both of its endpoints
    pub fn check_invariants(&self) -> Result<(), GraphError<T>> {
        let n = self.nodes.len();
        if self.index.len() != n {
            return Err(GraphError::Inconsistent(format!(
                "index holds {} values but the arena holds {n} nodes",
                self.index.len()
            )));
        }

        for slot in 0..n {
            self.check_slot(slot)?;
        }
        Ok(())
    }

    fn check_slot(&self, slot: usize) -> Result<(), GraphError<T>> {
        let n = self.nodes.len();
        let node = &self.nodes[slot];

        if self.slot_of(&node.value) != Some(slot) {
            return Err(GraphError::Inconsistent(format!(
                "node {:?} at slot {slot} is not indexed under its own value",
                node.value
            )));
        }

        for (i, &s) in node.edges.iter().enumerate() {
            if s >= n {
                return Err(GraphError::Inconsistent(format!(
                    "node {:?} links to slot {s}, arena has {n} nodes",
                    node.value
                )));
            }
            if node.edges[..i].contains(&s) {
                return Err(GraphError::Inconsistent(format!(
                    "node {:?} lists neighbour {:?} twice",
                    node.value, self.nodes[s].value
                )));
            }
            if !self.nodes[s].links_to(slot) {
                return Err(GraphError::Inconsistent(format!(
                    "edge {:?}-{:?} is not mutual",
                    node.value, self.nodes[s].value
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn debug_assert_slot(&self, slot: usize) {
        debug_assert!(self.check_slot(slot).is_ok(), "{:?}", self.check_slot(slot));
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn discard<R>(operation: &'static str, result: Result<R, GraphError<T>>) {
        if let Err(error) = result {
            trace_event!(operation, %error, "graph left unchanged");
        }
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.size();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.nodes.iter().map(|node| node.edges.len()).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let degree_sum: usize = degrees.iter().sum();

        GraphStatistics {
            node_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if node_count == 0 {
                0.0
            } else {
                degree_sum as f64 / node_count as f64
            },
            cluster_count: self.number_clusters(),
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all nodes.
    pub min_degree: usize,
    /// Maximum degree over all nodes.
    pub max_degree: usize,
    /// Median degree over all nodes.
    pub median_degree: usize,
    /// Average degree \(= \sum \deg / n\).
    pub average_degree: f64,
    /// Number of connected components.
    pub cluster_count: usize,
}

impl<T> Default for UndirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UndirectedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
        }
    }
}

/// Two graphs are equal when they hold the same nodes in the same order with
/// the same edge lists.
impl<T: PartialEq> PartialEq for UndirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<T: Eq> Eq for UndirectedGraph<T> {}

impl<T: fmt::Debug> fmt::Debug for UndirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.nodes()
                    .map(|node| (node.value(), node.neighbours().collect::<Vec<_>>())),
            )
            .finish()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> FromIterator<T> for UndirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Extend<T> for UndirectedGraph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}
