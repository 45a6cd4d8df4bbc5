//! Property tests for the dependency graph.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use depcycle::Graph;

/// Insertions over a small name space, so keys get re-inserted and edges
/// collide often.
fn insertions_strategy() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    prop::collection::vec((0..12usize, prop::collection::vec(0..12usize, 0..5)), 0..30)
}

fn name(i: usize) -> String {
    format!("n{i}")
}

fn build(insertions: &[(usize, Vec<usize>)]) -> Graph {
    let mut graph = Graph::new();
    for (key, deps) in insertions {
        let deps: Vec<String> = deps.iter().copied().map(name).collect();
        graph.add(&name(*key), deps);
    }
    graph
}

/// Insertions that only point from higher to lower indices, so no cycle can form.
fn build_dag(insertions: &[(usize, Vec<usize>)]) -> Graph {
    let mut graph = Graph::new();
    for (key, deps) in insertions {
        let deps: Vec<String> = deps.iter().copied().filter(|d| d < key).map(name).collect();
        graph.add(&name(*key), deps);
    }
    graph
}

/// Last insertion wins per key.
fn expected_edges(insertions: &[(usize, Vec<usize>)]) -> HashMap<String, Vec<String>> {
    let mut edges = HashMap::new();
    for (key, deps) in insertions {
        edges.insert(name(*key), deps.iter().copied().map(name).collect());
    }
    edges
}

/// Naive reachability for cross-checking.
fn reachable(graph: &Graph, from: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut stack: Vec<String> = graph
        .successors(from)
        .unwrap()
        .into_iter()
        .map(str::to_string)
        .collect();
    while let Some(v) = stack.pop() {
        if seen.insert(v.clone()) {
            stack.extend(graph.successors(&v).unwrap().into_iter().map(str::to_string));
        }
    }
    seen
}

proptest! {
    #[test]
    fn dag_has_no_cycles(insertions in insertions_strategy()) {
        let graph = build_dag(&insertions);
        prop_assert!(graph.cycles().is_empty());
        prop_assert!(!graph.has_cycle());
    }

    #[test]
    fn descendants_exclude_key_and_match_reachability(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        for key in graph.names() {
            let descendants = graph.descendants(key).unwrap();
            prop_assert!(!descendants.contains(&key));

            let unique: HashSet<&str> = descendants.iter().copied().collect();
            prop_assert_eq!(unique.len(), descendants.len(), "visited twice");

            let mut expected = reachable(&graph, key);
            expected.remove(key);
            let got: HashSet<String> = unique.into_iter().map(str::to_string).collect();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn clone_preserves_successor_sets(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        let mut copy = graph.clone();

        for key in graph.names() {
            let original: HashSet<&str> = graph.successors(key).unwrap().into_iter().collect();
            let cloned: HashSet<&str> = copy.successors(key).unwrap().into_iter().collect();
            prop_assert_eq!(original, cloned);
        }

        let before = graph.to_dot();
        copy.add("n0", ["fresh"]);
        prop_assert_eq!(graph.to_dot(), before);
        prop_assert!(!graph.contains("fresh"));
    }

    #[test]
    fn reinsertion_replaces_edge_set(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        for (key, deps) in expected_edges(&insertions) {
            let got: Vec<String> = graph
                .successors(&key)
                .unwrap()
                .into_iter()
                .map(str::to_string)
                .collect();
            prop_assert_eq!(got, deps);
        }
    }

    #[test]
    fn components_partition_vertices(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        let sccs = graph.strongly_connected_components();

        let mut seen = HashSet::new();
        for scc in &sccs {
            for v in scc {
                prop_assert!(seen.insert(v.name().to_string()), "vertex in two components");
            }
        }
        prop_assert_eq!(seen.len(), graph.len());
    }

    #[test]
    fn components_are_mutually_reachable(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        for scc in graph.cycles() {
            for a in &scc {
                let from_a = reachable(&graph, a.name());
                for b in &scc {
                    prop_assert!(from_a.contains(b.name()));
                }
            }
        }
    }

    #[test]
    fn repeated_queries_agree(insertions in insertions_strategy()) {
        let graph = build(&insertions);
        prop_assert_eq!(graph.cycle_names(), graph.cycle_names());
        let first = graph.names().next();
        if let Some(key) = first {
            prop_assert_eq!(graph.descendants(key).unwrap(), graph.descendants(key).unwrap());
        }
    }
}
