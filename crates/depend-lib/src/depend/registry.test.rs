// Tests for dependency registration and reset

use super::*;

#[test]
fn test_add_dependency_creates_nodes_lazily() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("page", "app.js").unwrap();

    assert!(registry.graph().has_node("page"));
    assert!(registry.graph().has_node("app.js"));
    assert_eq!(registry.graph().edge_count(), 1);
}

#[test]
fn test_add_dependency_with_many_dependees() {
    let mut registry = DependencyRegistry::new();
    registry
        .add_dependency("component", ["jquery.js", "underscore.js", "component.css"])
        .unwrap();

    assert_eq!(
        registry.graph().direct_dependencies_of("component").unwrap(),
        vec!["jquery.js", "underscore.js", "component.css"]
    );
}

#[test]
fn test_empty_dependee_list_still_registers_depender() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("page", Vec::<String>::new()).unwrap();

    assert!(registry.graph().has_node("page"));
    assert_eq!(registry.graph().edge_count(), 0);
}

#[test]
fn test_add_dependency_is_idempotent() {
    let mut once = DependencyRegistry::new();
    once.add_dependency("a", ["b", "c"]).unwrap();

    let mut twice = DependencyRegistry::new();
    twice.add_dependency("a", ["b", "c"]).unwrap();
    twice.add_dependency("a", ["b", "c"]).unwrap();

    assert_eq!(once.graph().node_count(), twice.graph().node_count());
    assert_eq!(once.graph().edge_count(), twice.graph().edge_count());
    assert_eq!(
        once.graph().overall_order(false).unwrap(),
        twice.graph().overall_order(false).unwrap()
    );
}

#[test]
fn test_add_dependency_resolves_aliases_on_both_sides() {
    let mut registry = DependencyRegistry::new();
    registry.add_alias("backbone", "backbone.js").unwrap();
    registry.add_alias("underscore", "underscore.js").unwrap();
    registry.add_dependency("backbone", "underscore").unwrap();

    assert!(!registry.graph().has_node("backbone"));
    assert_eq!(
        registry.graph().direct_dependencies_of("backbone.js").unwrap(),
        vec!["underscore.js"]
    );
}

#[test]
fn test_add_dependency_rejects_blank_names() {
    let mut registry = DependencyRegistry::new();
    assert!(matches!(
        registry.add_dependency("", "a.js"),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(matches!(
        registry.add_dependency("page", ["a.js", ""]),
        Err(DependError::InvalidArgument { .. })
    ));
    assert_eq!(registry.graph().node_count(), 0);
}

#[test]
fn test_add_dependency_reports_alias_cycles() {
    let mut registry = DependencyRegistry::new();
    registry.add_alias("a", "b").unwrap();
    registry.add_alias("b", "a").unwrap();

    assert!(matches!(
        registry.add_dependency("page", "a"),
        Err(DependError::CycleDetected { .. })
    ));
}

#[test]
fn test_alias_queries_delegate_to_table() {
    let mut registry = DependencyRegistry::new();
    registry.add_alias("a", "b").unwrap();
    registry.add_alias("b", "c").unwrap();

    assert_eq!(registry.resolve_alias("a").unwrap(), "c");
    assert!(registry.alias_equals("a", "c").unwrap());
    assert!(!registry.alias_equals("c", "x").unwrap());
    assert_eq!(registry.aliases().len(), 2);
}

#[test]
fn test_init_without_config_resets_to_empty() {
    let mut registry = DependencyRegistry::new();
    registry.add_alias("x", "y").unwrap();
    registry.add_dependency("a", "b").unwrap();

    registry.init(None).unwrap();
    assert_eq!(registry.graph().node_count(), 0);
    assert!(registry.aliases().is_empty());
}

#[test]
fn test_init_applies_aliases_before_deps() {
    let config = DependConfig::new()
        .with_dep("page", "jquery")
        .with_alias("jquery", "jquery.js");

    let mut registry = DependencyRegistry::new();
    registry.init(Some(&config)).unwrap();

    assert!(registry.graph().has_node("jquery.js"));
    assert!(!registry.graph().has_node("jquery"));
}

#[test]
fn test_init_replaces_previous_declarations() {
    let mut registry = DependencyRegistry::new();
    registry
        .init(Some(&DependConfig::new().with_dep("a.js", "b.js")))
        .unwrap();
    registry
        .init(Some(&DependConfig::new().with_dep("a.js", "c.js")))
        .unwrap();

    assert!(!registry.graph().has_node("b.js"));
    assert_eq!(
        registry.graph().direct_dependencies_of("a.js").unwrap(),
        vec!["c.js"]
    );
}

#[test]
fn test_failed_init_keeps_previous_state() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("a", "b").unwrap();

    let broken = DependConfig::new().with_alias("", "x");
    assert!(registry.init(Some(&broken)).is_err());
    assert!(registry.graph().has_node("a"));
}

#[test]
fn test_graph_mut_allows_node_removal() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("a", ["b", "c"]).unwrap();

    registry.graph_mut().remove_node("b");
    assert_eq!(
        registry.graph().direct_dependencies_of("a").unwrap(),
        vec!["c"]
    );
}

#[test]
fn test_remove_alias_restores_plain_name() {
    let mut registry = DependencyRegistry::new();
    registry.add_alias("jquery", "jquery.js").unwrap();

    assert_eq!(registry.remove_alias("jquery"), Some("jquery.js".to_string()));
    assert_eq!(registry.resolve_alias("jquery").unwrap(), "jquery");
    assert_eq!(registry.remove_alias("jquery"), None);
}

#[test]
fn test_add_alias_rejects_blank_names() {
    let mut registry = DependencyRegistry::new();

    assert!(matches!(
        registry.add_alias(" ", "jquery.js"),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(matches!(
        registry.add_alias("jquery", ""),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(registry.aliases().is_empty());
}
