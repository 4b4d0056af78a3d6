// Tests for ordered dependency queries

use super::*;
use crate::depend::manifest::DependConfig;

fn registry(config: DependConfig) -> DependencyRegistry {
    DependencyRegistry::from_config(&config).unwrap()
}

fn position(order: &[String], name: &str) -> usize {
    order
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("{} missing from {:?}", name, order))
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

/// Aliased backbone application used by several tests
fn backbone_app(backbone_deps: &[&str]) -> DependencyRegistry {
    let mut registry = registry(
        DependConfig::new()
            .with_alias("jquery", "jquery.js")
            .with_alias("backbone", "backbone.js")
            .with_alias("underscore", "underscore.js")
            .with_alias("my-backbone-app", "my-backbone-app.js")
            .with_dep("backbone", backbone_deps.to_vec())
            .with_dep("my-backbone-app", ["backbone", "jquery"]),
    );
    registry.add_dependency("page", "my-backbone-app").unwrap();
    registry
}

// ============================================================================
// ordered_dependencies_of
// ============================================================================

#[test]
fn test_single_level_ordering() {
    let registry = registry(DependConfig::new().with_dep("page", "x").with_dep("x", "a"));

    assert_eq!(registry.ordered_dependencies_of("page").unwrap(), vec!["a", "x"]);
}

#[test]
fn test_ordered_dependencies_exclude_start() {
    let registry = registry(DependConfig::new().with_dep("page", ["a", "b"]));
    let deps = registry.ordered_dependencies_of("page").unwrap();
    assert!(!deps.contains(&"page".to_string()));
    assert_eq!(sorted(deps), vec!["a", "b"]);
}

#[test]
fn test_ordered_dependencies_only_cover_start_closure() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", "a.js")
            .with_dep("other-page", ["b.js", "a.js"]),
    );
    assert_eq!(registry.ordered_dependencies_of("page").unwrap(), vec!["a.js"]);
}

#[test]
fn test_ordered_dependencies_resolve_start_alias() {
    let registry = registry(
        DependConfig::new()
            .with_alias("home", "page")
            .with_dep("page", "a.js"),
    );
    assert_eq!(registry.ordered_dependencies_of("home").unwrap(), vec!["a.js"]);
}

#[test]
fn test_unknown_start_fails() {
    let registry = registry(DependConfig::new().with_dep("page", "a.js"));
    assert_eq!(
        registry.ordered_dependencies_of("nowhere").unwrap_err(),
        DependError::node_not_found("nowhere")
    );
}

#[test]
fn test_cycle_fails() {
    let registry = registry(
        DependConfig::new()
            .with_dep("a.js", "b.js")
            .with_dep("b.js", "c.js")
            .with_dep("c.js", "a.js"),
    );

    let err = registry.ordered_dependencies_of("a.js").unwrap_err();
    let cycle = err.cycle().expect("expected a cycle");
    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle.len(), 4);
}

#[test]
fn test_unreachable_cycle_does_not_block_ordering() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", "a.js")
            .with_dep("x.js", "y.js")
            .with_dep("y.js", "x.js"),
    );

    assert_eq!(registry.ordered_dependencies_of("page").unwrap(), vec!["a.js"]);
    assert_eq!(
        registry
            .ordered_js_dependencies_of("page", &QueryOptions::new())
            .unwrap(),
        vec!["a.js"]
    );
}

#[test]
fn test_fully_cyclic_graph_fails_every_query() {
    let registry = registry(
        DependConfig::new()
            .with_dep("x.js", "y.js")
            .with_dep("y.js", "x.js"),
    );

    assert_eq!(
        registry.ordered_dependencies_of("x.js").unwrap_err(),
        DependError::CycleDetected {
            path: vec!["x.js".to_string(), "y.js".to_string(), "x.js".to_string()]
        }
    );
}

// ============================================================================
// ordered_js_dependencies_of
// ============================================================================

#[test]
fn test_multiple_levels_deep_ordering() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", "depends-on-thing-that-depends-on-a.js")
            .with_dep("depends-on-thing-that-depends-on-a.js", "depends-on-a.js")
            .with_dep("depends-on-a.js", "a.js"),
    );
    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();

    assert!(position(&deps, "a.js") < position(&deps, "depends-on-a.js"));
    assert!(
        position(&deps, "depends-on-a.js")
            < position(&deps, "depends-on-thing-that-depends-on-a.js")
    );
}

#[test]
fn test_omits_dependencies_not_ending_in_js() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", "component")
            .with_dep(
                "component",
                ["jquery.js", "underscore.js", "backbone.js", "component.css"],
            ),
    );
    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();

    assert_eq!(
        sorted(deps),
        vec!["backbone.js", "jquery.js", "underscore.js"]
    );
}

#[test]
fn test_resolves_aliases_in_deep_graph() {
    let registry = backbone_app(&["underscore"]);
    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();

    assert!(position(&deps, "underscore.js") < position(&deps, "backbone.js"));
    assert!(position(&deps, "backbone.js") < position(&deps, "my-backbone-app.js"));
    assert!(position(&deps, "jquery.js") < position(&deps, "my-backbone-app.js"));
}

#[test]
fn test_resolves_aliases_with_deduplication() {
    let registry = backbone_app(&["underscore", "jquery"]);
    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();

    assert!(position(&deps, "underscore.js") < position(&deps, "backbone.js"));
    assert!(position(&deps, "jquery.js") < position(&deps, "backbone.js"));
    assert!(position(&deps, "backbone.js") < position(&deps, "my-backbone-app.js"));
    assert_eq!(deps.iter().filter(|d| *d == "jquery.js").count(), 1);
    assert_eq!(deps.len(), 4);
}

#[test]
fn test_deduplicates_shared_dependencies() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", ["component1.js", "component2.js", "component3.js"])
            .with_dep("component1.js", "jquery.js")
            .with_dep("component2.js", "jquery.js")
            .with_dep("component3.js", ["component1.js", "jquery.js"]),
    );
    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();

    assert_eq!(deps.iter().filter(|d| *d == "jquery.js").count(), 1);
    assert_eq!(deps.iter().filter(|d| *d == "component1.js").count(), 1);
    assert!(position(&deps, "component1.js") < position(&deps, "component3.js"));
}

#[test]
fn test_excluding_single_starting_point() {
    let registry = registry(
        DependConfig::new()
            .with_dep("page", ["a.js", "b.js"])
            .with_dep("other-page", "a.js"),
    );

    let all = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();
    assert!(all.contains(&"a.js".to_string()));

    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::excluding("other-page"))
        .unwrap();
    assert_eq!(deps, vec!["b.js"]);
}

#[test]
fn test_excluding_transitive_dependencies_of_several_pages() {
    let registry = registry(
        DependConfig::new()
            .with_alias("shell", "shell-page")
            .with_dep("page", ["app.js", "vendor.js", "polyfill.js"])
            .with_dep("app.js", "framework.js")
            .with_dep("shell-page", "vendor.js")
            .with_dep("vendor.js", "framework.js")
            .with_dep("legacy-page", "polyfill.js"),
    );

    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::excluding(["shell", "legacy-page"]))
        .unwrap();
    assert_eq!(deps, vec!["app.js"]);
}

#[test]
fn test_excluding_unknown_page_fails() {
    let registry = registry(DependConfig::new().with_dep("page", "a.js"));
    assert!(matches!(
        registry.ordered_js_dependencies_of("page", &QueryOptions::excluding("ghost")),
        Err(DependError::NodeNotFound { .. })
    ));
}

#[test]
fn test_custom_suffix() {
    let registry = registry(
        DependConfig::new().with_dep("page", ["theme.css", "app.js", "reset.css"]),
    );
    let styles = registry
        .ordered_resources_of("page", ".css", &QueryOptions::new())
        .unwrap();
    assert_eq!(styles, vec!["theme.css", "reset.css"]);
}

#[test]
fn test_reset_discards_aliases() {
    let mut registry = registry(
        DependConfig::new()
            .with_alias("a.js", "a-resolved.js")
            .with_dep("page", "a.js"),
    );
    registry
        .init(Some(&DependConfig::new().with_dep("page", "a.js")))
        .unwrap();

    let deps = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();
    assert_eq!(deps, vec!["a.js"]);
}

// ============================================================================
// QueryOptions
// ============================================================================

#[test]
fn test_empty_exclusion_list_means_unfiltered() {
    assert_eq!(QueryOptions::from(Vec::new()), QueryOptions::new());
}

#[test]
fn test_exclusion_list_keeps_order() {
    let options = QueryOptions::from(vec!["common".to_string(), "vendor".to_string()]);
    assert_eq!(
        options.excluding.unwrap().as_slice(),
        &["common".to_string(), "vendor".to_string()]
    );
}
