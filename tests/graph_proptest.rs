use std::collections::{BTreeSet, HashMap};

use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;
use undigraph::UndirectedGraph;

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveNode(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    let value = 0u8..16;
    prop_oneof![
        3 => value.clone().prop_map(Operation::AddNode),
        4 => (value.clone(), value.clone()).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        1 => (value.clone(), value.clone()).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
        1 => value.prop_map(Operation::RemoveNode),
    ]
}

/// Reference model: a node set and a set of normalized `(min, max)` edges.
#[derive(Default)]
struct Model {
    nodes: Vec<u8>,
    edges: BTreeSet<(u8, u8)>,
}

fn key(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

impl Model {
    fn contains(&self, v: u8) -> bool {
        self.nodes.contains(&v)
    }

    fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::AddNode(v) => {
                if !self.contains(v) {
                    self.nodes.push(v);
                }
            }
            Operation::AddEdge(a, b) => {
                if self.contains(a) && self.contains(b) {
                    self.edges.insert(key(a, b));
                }
            }
            Operation::RemoveEdge(a, b) => {
                self.edges.remove(&key(a, b));
            }
            Operation::RemoveNode(v) => {
                self.nodes.retain(|&n| n != v);
                self.edges.retain(|&(a, b)| a != v && b != v);
            }
        }
    }

    fn petgraph(&self) -> (UnGraph<u8, ()>, HashMap<u8, NodeIndex>) {
        let mut g = UnGraph::new_undirected();
        let index: HashMap<u8, NodeIndex> = self.nodes.iter().map(|&v| (v, g.add_node(v))).collect();
        for &(a, b) in &self.edges {
            g.add_edge(index[&a], index[&b], ());
        }
        (g, index)
    }
}

fn apply(graph: &mut UndirectedGraph<u8>, op: &Operation) {
    match *op {
        Operation::AddNode(v) => graph.add_node(v),
        Operation::AddEdge(a, b) => graph.add_edge(&a, &b),
        Operation::RemoveEdge(a, b) => graph.remove_edge(&a, &b),
        Operation::RemoveNode(v) => {
            let expected = graph.snapshot(&v);
            assert_eq!(graph.remove_node(&v), expected);
        }
    }
}

fn build(ops: &[Operation]) -> (UndirectedGraph<u8>, Model) {
    let mut graph = UndirectedGraph::new();
    let mut model = Model::default();
    for op in ops {
        apply(&mut graph, op);
        model.apply(op);
    }
    (graph, model)
}

fn assert_walkable(graph: &UndirectedGraph<u8>, path: &[u8], source: u8, destination: u8) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&destination));
    for pair in path.windows(2) {
        assert!(graph.are_adjacent(&pair[0], &pair[1]));
    }
}

proptest! {
    #[test]
    fn graph_matches_model(ops in proptest::collection::vec(operation(), 1..80)) {
        let mut graph = UndirectedGraph::new();
        let mut model = Model::default();

        for op in &ops {
            apply(&mut graph, op);
            model.apply(op);

            prop_assert!(graph.check_invariants().is_ok(), "{:?}", graph.check_invariants());
            prop_assert_eq!(graph.size(), model.nodes.len());
            prop_assert_eq!(graph.values().copied().collect::<Vec<_>>(), model.nodes.clone());
            prop_assert_eq!(graph.edge_count(), model.edges.len());
        }

        for a in 0u8..16 {
            for b in 0u8..16 {
                prop_assert_eq!(graph.are_adjacent(&a, &b), model.edges.contains(&key(a, b)));
            }
        }
    }

    #[test]
    fn cluster_count_matches_petgraph(ops in proptest::collection::vec(operation(), 1..80)) {
        let (graph, model) = build(&ops);
        let (reference, _) = model.petgraph();

        prop_assert_eq!(graph.number_clusters(), connected_components(&reference));

        let clusters = graph.clusters();
        prop_assert_eq!(clusters.len(), graph.number_clusters());
        let mut members: Vec<u8> = clusters.into_iter().flatten().collect();
        members.sort_unstable();
        let mut expected = model.nodes.clone();
        expected.sort_unstable();
        prop_assert_eq!(members, expected);
    }

    #[test]
    fn searches_find_valid_paths(
        ops in proptest::collection::vec(operation(), 1..80),
        source in 0u8..16,
        destination in 0u8..16,
    ) {
        let (graph, model) = build(&ops);

        if !model.contains(source) || !model.contains(destination) {
            prop_assert_eq!(graph.bf_search(&source, &destination), None);
            prop_assert_eq!(graph.df_search(&source, &destination), None);
            return Ok(());
        }

        let (reference, index) = model.petgraph();
        let distances = dijkstra(&reference, index[&source], Some(index[&destination]), |_| 1usize);
        let bfs = graph.bf_search(&source, &destination).unwrap();
        let dfs = graph.df_search(&source, &destination).unwrap();

        match distances.get(&index[&destination]) {
            Some(&distance) => {
                assert_walkable(&graph, &bfs, source, destination);
                assert_walkable(&graph, &dfs, source, destination);
                prop_assert_eq!(bfs.len(), distance + 1);
                prop_assert!(dfs.len() >= bfs.len());
            }
            None => {
                prop_assert!(bfs.is_empty());
                prop_assert!(dfs.is_empty());
            }
        }
    }

    #[test]
    fn removing_a_node_never_merges_clusters(
        ops in proptest::collection::vec(operation(), 1..80),
        victim in 0u8..16,
    ) {
        let (mut graph, _) = build(&ops);
        let before = graph.number_clusters();

        match graph.remove_node(&victim) {
            Some(removed) => {
                prop_assert_eq!(removed.value, victim);
                for neighbour in removed.neighbours.iter().filter(|&&n| n != victim) {
                    prop_assert!(!graph.are_adjacent(neighbour, &victim));
                    prop_assert!(!graph.neighbours(neighbour).unwrap().any(|&n| n == victim));
                }
                // An isolated node takes its cluster with it.
                let floor = if removed.neighbours.iter().all(|&n| n == victim) { before - 1 } else { before };
                prop_assert!(graph.number_clusters() >= floor);
            }
            None => prop_assert_eq!(graph.number_clusters(), before),
        }
    }
}
