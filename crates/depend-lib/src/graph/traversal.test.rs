// Tests for depth-first traversal and cycle detection

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Build a store from `(depender, dependee)` pairs; returns the store and a name lookup
fn store_from_edges(edges: &[(&str, &str)]) -> (Store, std::collections::HashMap<String, NodeIndex>) {
    let mut store = Store::default();
    let mut index = std::collections::HashMap::new();
    for (from, to) in edges {
        for name in [from, to] {
            if !index.contains_key(*name) {
                let idx = store.add_node(name.to_string());
                index.insert(name.to_string(), idx);
            }
        }
        store.add_edge(index[*from], index[*to], ());
    }
    (store, index)
}

fn names(store: &Store, order: Vec<NodeIndex>) -> Vec<String> {
    order.into_iter().map(|idx| store[idx].clone()).collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_post_order_puts_dependencies_first() {
    let (store, index) = store_from_edges(&[("page", "x"), ("x", "a")]);
    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Outgoing, false)
        .run(index["page"], &mut acc)
        .unwrap();

    assert_eq!(names(&store, acc.into_order()), vec!["a", "x", "page"]);
}

#[test]
fn test_neighbors_follow_insertion_order() {
    let (store, index) = store_from_edges(&[("page", "c1"), ("page", "c2"), ("page", "c3")]);
    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Outgoing, false)
        .run(index["page"], &mut acc)
        .unwrap();

    assert_eq!(
        names(&store, acc.into_order()),
        vec!["c1", "c2", "c3", "page"]
    );
}

#[test]
fn test_diamond_is_emitted_once() {
    let (store, index) = store_from_edges(&[
        ("page", "c1"),
        ("page", "c2"),
        ("page", "c3"),
        ("c1", "jq"),
        ("c2", "jq"),
        ("c3", "c1"),
        ("c3", "jq"),
    ]);
    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Outgoing, false)
        .run(index["page"], &mut acc)
        .unwrap();

    let order = names(&store, acc.into_order());
    assert_eq!(order.iter().filter(|n| *n == "jq").count(), 1);
    assert_eq!(order.iter().filter(|n| *n == "c1").count(), 1);
    assert_eq!(order.len(), 5);
}

#[test]
fn test_incoming_direction_orders_dependants_first() {
    let (store, index) = store_from_edges(&[("page", "x"), ("x", "a")]);
    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Incoming, false)
        .run(index["a"], &mut acc)
        .unwrap();

    assert_eq!(names(&store, acc.into_order()), vec!["page", "x", "a"]);
}

#[test]
fn test_leaves_only_filters_inner_nodes() {
    let (store, index) = store_from_edges(&[("a", "b"), ("b", "c"), ("a", "d")]);
    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Outgoing, true)
        .run(index["a"], &mut acc)
        .unwrap();

    assert_eq!(names(&store, acc.into_order()), vec!["c", "d"]);
}

#[test]
fn test_shared_accumulator_skips_visited_start() {
    let (store, index) = store_from_edges(&[("a", "b"), ("c", "b")]);
    let traversal = Traversal::new(&store, Direction::Outgoing, false);
    let mut acc = Accumulator::new();

    traversal.run(index["a"], &mut acc).unwrap();
    traversal.run(index["b"], &mut acc).unwrap();
    traversal.run(index["c"], &mut acc).unwrap();

    assert_eq!(names(&store, acc.into_order()), vec!["b", "a", "c"]);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let names_owned: Vec<String> = (0..50_000).map(|i| format!("n{}", i)).collect();
    let edges: Vec<(&str, &str)> = names_owned
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();
    let (store, index) = store_from_edges(&edges);

    let mut acc = Accumulator::new();
    Traversal::new(&store, Direction::Outgoing, false)
        .run(index["n0"], &mut acc)
        .unwrap();

    let order = acc.into_order();
    assert_eq!(order.len(), 50_000);
    assert_eq!(store[order[0]], "n49999");
}

// ============================================================================
// Cycle Detection Tests
// ============================================================================

#[test]
fn test_detect_simple_cycle_two_nodes() {
    let (store, index) = store_from_edges(&[("a", "b"), ("b", "a")]);
    let mut acc = Accumulator::new();
    let err = Traversal::new(&store, Direction::Outgoing, false)
        .run(index["a"], &mut acc)
        .unwrap_err();

    assert_eq!(
        err,
        DependError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()]
        }
    );
}

#[test]
fn test_detect_three_node_cycle_with_readable_path() {
    let (store, index) = store_from_edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
    let mut acc = Accumulator::new();
    let err = Traversal::new(&store, Direction::Outgoing, false)
        .run(index["a"], &mut acc)
        .unwrap_err();

    assert_eq!(err.to_string(), "Dependency cycle found: a -> b -> c -> a");
}

#[test]
fn test_cycle_path_starts_at_reentered_node() {
    // page is on the path but not part of the cycle
    let (store, index) = store_from_edges(&[("page", "a"), ("a", "b"), ("b", "a")]);
    let mut acc = Accumulator::new();
    let err = Traversal::new(&store, Direction::Outgoing, false)
        .run(index["page"], &mut acc)
        .unwrap_err();

    assert_eq!(err.cycle().unwrap(), ["a", "b", "a"]);
}

#[test]
fn test_self_loop_is_a_cycle() {
    let (store, index) = store_from_edges(&[("a", "a")]);
    let mut acc = Accumulator::new();
    let err = Traversal::new(&store, Direction::Outgoing, false)
        .run(index["a"], &mut acc)
        .unwrap_err();

    assert_eq!(err.cycle().unwrap(), ["a", "a"]);
}

#[test]
fn test_cycle_detected_in_incoming_direction() {
    let (store, index) = store_from_edges(&[("a", "b"), ("b", "c"), ("c", "b")]);
    let mut acc = Accumulator::new();
    let result = Traversal::new(&store, Direction::Incoming, false).run(index["c"], &mut acc);

    assert!(matches!(result, Err(DependError::CycleDetected { .. })));
}

#[test]
fn test_revisiting_finished_node_is_not_a_cycle() {
    // Two paths into the same node must not be mistaken for a cycle
    let (store, index) = store_from_edges(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
    let mut acc = Accumulator::new();
    let result = Traversal::new(&store, Direction::Outgoing, false).run(index["a"], &mut acc);

    assert!(result.is_ok());
}
