//! Node storage and the two ways of looking at a node from outside the graph.
//!
//! - [`NodeRef`] borrows a live node and resolves its neighbour slots on demand.
//! - [`NodeSnapshot`] owns a copy of the value and neighbour values, and is what
//!   [`UndirectedGraph::remove_node`](super::UndirectedGraph::remove_node) hands back.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A node as stored in the graph's arena.
///
/// `edges` holds slots into the same arena, in the order the edges were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) edges: Vec<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn links_to(&self, slot: usize) -> bool {
        self.edges.contains(&slot)
    }

    /// Drops the edge entry pointing at `slot`, returning whether one existed.
    pub(crate) fn unlink(&mut self, slot: usize) -> bool {
        match self.edges.iter().position(|&s| s == slot) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// A borrowed, read-only view of a live node.
pub struct NodeRef<'a, T> {
    nodes: &'a [Node<T>],
    slot: usize,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], slot: usize) -> Self {
        debug_assert!(slot < nodes.len(), "slot {slot} out of bounds");
        Self { nodes, slot }
    }

    /// The node's value.
    pub fn value(&self) -> &'a T {
        &self.nodes[self.slot].value
    }

    /// Number of edges incident to this node.
    pub fn degree(&self) -> usize {
        self.nodes[self.slot].edges.len()
    }

    /// Neighbour values in edge insertion order.
    pub fn neighbours(&self) -> impl Iterator<Item = &'a T> + 'a {
        let nodes = self.nodes;
        nodes[self.slot].edges.iter().map(move |&s| &nodes[s].value)
    }

    /// Returns `true` if `value` is among this node's neighbours.
    pub fn is_neighbour_of(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.neighbours().any(|n| n == value)
    }

    /// Copies the value and neighbour values out of the graph.
    pub fn to_snapshot(&self) -> NodeSnapshot<T>
    where
        T: Clone,
    {
        NodeSnapshot {
            value: self.value().clone(),
            neighbours: self.neighbours().cloned().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("neighbours", &self.neighbours().collect::<Vec<_>>())
            .finish()
    }
}

/// An owned copy of a node: its value plus its neighbours' values.
///
/// A snapshot shares nothing with the graph it was taken from, so it stays
/// valid and unchanged no matter what happens to the graph afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeSnapshot<T> {
    /// The node's value.
    pub value: T,
    /// Neighbour values in edge insertion order.
    pub neighbours: Vec<T>,
}

impl<T> NodeSnapshot<T> {
    /// Number of neighbours recorded in the snapshot.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns `true` if `value` was a neighbour when the snapshot was taken.
    pub fn is_neighbour_of(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.neighbours.contains(value)
    }
}

/// Renders `value,n1,n2,...`.
impl<T: fmt::Display> fmt::Display for NodeSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        for n in &self.neighbours {
            write!(f, ",{n}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Node<char>> {
        vec![
            Node { value: 'a', edges: vec![1, 2] },
            Node { value: 'b', edges: vec![0] },
            Node { value: 'c', edges: vec![0] },
        ]
    }

    #[test]
    fn node_ref_resolves_slots_to_values() {
        let nodes = triangle();
        let a = NodeRef::new(&nodes, 0);

        assert_eq!(*a.value(), 'a');
        assert_eq!(a.degree(), 2);
        assert_eq!(a.neighbours().copied().collect::<Vec<_>>(), vec!['b', 'c']);
        assert!(a.is_neighbour_of(&'c'));
        assert!(!a.is_neighbour_of(&'a'));
    }

    #[test]
    fn unlink_removes_a_single_entry() {
        let mut node = Node::new(0u32);
        node.edges.extend([4, 7, 9]);

        assert!(node.unlink(7));
        assert!(!node.unlink(7));
        assert_eq!(node.edges, vec![4, 9]);
        assert!(node.links_to(9));
        assert!(!node.links_to(7));
    }

    #[test]
    fn snapshot_display_matches_print_format() {
        let nodes = triangle();
        let snap = NodeRef::new(&nodes, 0).to_snapshot();
        assert_eq!(snap.to_string(), "a,b,c");
        assert_eq!(snap.degree(), 2);
        assert!(snap.is_neighbour_of(&'b'));

        let lone = NodeSnapshot { value: 10, neighbours: Vec::new() };
        assert_eq!(lone.to_string(), "10");
    }
}
