// Tests for dependency graph storage and queries

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Build a graph from `(depender, dependee)` pairs, creating nodes as needed
fn graph_from_edges(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (from, to) in edges {
        graph.add_node(from);
        graph.add_node(to);
        graph.add_dependency(from, to).unwrap();
    }
    graph
}

fn position(order: &[String], name: &str) -> usize {
    order
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("{} missing from {:?}", name, order))
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.overall_order(false).unwrap(), Vec::<String>::new());
}

#[test]
fn test_add_duplicate_node_is_idempotent() {
    let mut graph = DependencyGraph::new();
    let idx1 = graph.add_node("jquery.js");
    let idx2 = graph.add_node("jquery.js");

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.has_node("jquery.js"));
    assert!(!graph.has_node("underscore.js"));
}

#[test]
fn test_add_dependency_requires_both_nodes() {
    let mut graph = DependencyGraph::new();
    graph.add_node("a");

    let err = graph.add_dependency("a", "b").unwrap_err();
    assert_eq!(err, DependError::node_not_found("b"));

    let err = graph.add_dependency("c", "a").unwrap_err();
    assert_eq!(err, DependError::node_not_found("c"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_dependency_twice_is_idempotent() {
    let mut graph = graph_from_edges(&[("a", "b")]);
    graph.add_dependency("a", "b").unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.direct_dependencies_of("a").unwrap(), vec!["b"]);
    assert_eq!(graph.direct_dependants_of("b").unwrap(), vec!["a"]);
}

#[test]
fn test_edge_indices_stay_mirrored() {
    let graph = graph_from_edges(&[("a", "b"), ("a", "c"), ("d", "b")]);

    for name in ["a", "b", "c", "d"] {
        for dep in graph.direct_dependencies_of(name).unwrap() {
            assert!(graph.direct_dependants_of(&dep).unwrap().contains(&name.to_string()));
        }
        for dependant in graph.direct_dependants_of(name).unwrap() {
            assert!(
                graph
                    .direct_dependencies_of(&dependant)
                    .unwrap()
                    .contains(&name.to_string())
            );
        }
    }
}

#[test]
fn test_direct_dependencies_keep_declaration_order() {
    let graph = graph_from_edges(&[("page", "x"), ("page", "y"), ("page", "z")]);
    assert_eq!(
        graph.direct_dependencies_of("page").unwrap(),
        vec!["x", "y", "z"]
    );
    assert!(graph.direct_dependencies_of("missing").is_none());
}

#[test]
fn test_remove_node_strips_all_edges() {
    let mut graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("d", "b")]);

    assert!(graph.remove_node("b"));
    assert!(!graph.has_node("b"));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.direct_dependencies_of("a").unwrap().is_empty());
    assert!(graph.direct_dependants_of("c").unwrap().is_empty());

    // Removing again is a no-op
    assert!(!graph.remove_node("b"));
}

#[test]
fn test_nodes_keep_insertion_order_after_removal() {
    let mut graph = DependencyGraph::new();
    for name in ["a", "b", "c"] {
        graph.add_node(name);
    }
    graph.remove_node("a");
    graph.add_node("d");

    let nodes: Vec<&str> = graph.nodes().collect();
    assert_eq!(nodes, vec!["b", "c", "d"]);
}

#[test]
fn test_remove_dependency() {
    let mut graph = graph_from_edges(&[("a", "b"), ("a", "c")]);

    graph.remove_dependency("a", "b");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.direct_dependencies_of("a").unwrap(), vec!["c"]);
    assert!(graph.direct_dependants_of("b").unwrap().is_empty());

    // Missing edges and missing nodes are tolerated
    graph.remove_dependency("a", "b");
    graph.remove_dependency("nope", "c");
    graph.remove_dependency("a", "nope");
    assert_eq!(graph.edge_count(), 1);
}

// ============================================================================
// Transitive Closure
// ============================================================================

#[test]
fn test_dependencies_of_is_transitive_and_ordered() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("a", "d")]);

    let deps = graph.dependencies_of("a", false).unwrap();
    assert_eq!(deps.len(), 3);
    assert!(position(&deps, "c") < position(&deps, "b"));
    assert!(!deps.contains(&"a".to_string()));
}

#[test]
fn test_dependencies_of_leaves_only() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("a", "d")]);

    let mut leaves = graph.dependencies_of("a", true).unwrap();
    leaves.sort();
    assert_eq!(leaves, vec!["c", "d"]);
}

#[test]
fn test_dependants_of_is_transitive() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("d", "c")]);

    let mut dependants = graph.dependants_of("c", false).unwrap();
    dependants.sort();
    assert_eq!(dependants, vec!["a", "b", "d"]);

    let mut top = graph.dependants_of("c", true).unwrap();
    top.sort();
    assert_eq!(top, vec!["a", "d"]);
}

#[test]
fn test_closure_excludes_start_node() {
    let graph = graph_from_edges(&[("a", "b")]);
    assert!(graph.dependencies_of("b", false).unwrap().is_empty());
    assert!(graph.dependants_of("a", false).unwrap().is_empty());
}

#[test]
fn test_closure_of_unknown_node_fails() {
    let graph = graph_from_edges(&[("a", "b")]);
    assert_eq!(
        graph.dependencies_of("zzz", false).unwrap_err(),
        DependError::node_not_found("zzz")
    );
    assert_eq!(
        graph.dependants_of("zzz", true).unwrap_err(),
        DependError::node_not_found("zzz")
    );
}

// ============================================================================
// Overall Order
// ============================================================================

#[test]
fn test_overall_order_is_topologically_valid() {
    let graph = graph_from_edges(&[
        ("page", "app.js"),
        ("app.js", "backbone.js"),
        ("app.js", "jquery.js"),
        ("backbone.js", "underscore.js"),
        ("backbone.js", "jquery.js"),
        ("other", "jquery.js"),
    ]);

    let order = graph.overall_order(false).unwrap();
    assert_eq!(order.len(), graph.node_count());

    for name in graph.nodes() {
        for dep in graph.dependencies_of(name, false).unwrap() {
            assert!(
                position(&order, &dep) < position(&order, name),
                "{} should precede {} in {:?}",
                dep,
                name,
                order
            );
        }
    }
}

#[test]
fn test_overall_order_includes_isolated_nodes() {
    let mut graph = graph_from_edges(&[("a", "b")]);
    graph.add_node("lonely");

    let order = graph.overall_order(false).unwrap();
    assert_eq!(order.len(), 3);
    assert!(order.contains(&"lonely".to_string()));
}

#[test]
fn test_overall_order_leaves_only() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("x", "y")]);

    let mut leaves = graph.overall_order(true).unwrap();
    leaves.sort();
    assert_eq!(leaves, vec!["c", "y"]);
}

#[test]
fn test_overall_order_is_deterministic() {
    let build = || graph_from_edges(&[("a", "b"), ("a", "c"), ("c", "d"), ("e", "d")]);
    assert_eq!(
        build().overall_order(false).unwrap(),
        build().overall_order(false).unwrap()
    );
}

#[test]
fn test_has_cycles() {
    assert!(!graph_from_edges(&[("a", "b"), ("b", "c")]).has_cycles());
    assert!(graph_from_edges(&[("a", "b"), ("b", "a")]).has_cycles());
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_overall_order_reports_fully_cyclic_graph() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("c", "a")]);

    assert_eq!(
        graph.overall_order(false).unwrap_err(),
        DependError::CycleDetected {
            path: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "a".to_string()
            ]
        }
    );
}

#[test]
fn test_overall_order_skips_cycle_unreachable_from_roots() {
    let graph = graph_from_edges(&[("page", "a.js"), ("x.js", "y.js"), ("y.js", "x.js")]);

    assert_eq!(graph.overall_order(false).unwrap(), vec!["a.js", "page"]);
}

#[test]
fn test_overall_order_fails_when_root_reaches_cycle() {
    let graph = graph_from_edges(&[("page", "x.js"), ("x.js", "y.js"), ("y.js", "x.js")]);

    assert!(matches!(
        graph.overall_order(false),
        Err(DependError::CycleDetected { .. })
    ));
}

#[test]
fn test_find_cycle_sees_unreachable_cycles() {
    let graph = graph_from_edges(&[("page", "a.js"), ("x.js", "y.js"), ("y.js", "x.js")]);

    assert_eq!(
        graph.find_cycle(),
        Some(vec!["x.js".to_string(), "y.js".to_string(), "x.js".to_string()])
    );
}

#[test]
fn test_find_cycle_on_acyclic_graph() {
    let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("a", "c")]);
    assert_eq!(graph.find_cycle(), None);
}
