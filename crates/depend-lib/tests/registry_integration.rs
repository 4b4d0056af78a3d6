use depend_lib::application::config::AppConfig;
use depend_lib::primitives::{ColorIntent, OutputFormat};
use depend_lib::{DependConfig, DependError, DependencyRegistry, QueryOptions};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.output, OutputFormat::Text);
}

#[test]
fn test_manifest_to_ordered_scripts() {
    let manifest = DependConfig::from_yaml_str(
        r#"
aliases:
  jquery: vendor/jquery.js
deps:
  widgets.js: [jquery, widgets.css]
  page: [widgets.js, jquery]
"#,
    )
    .unwrap();
    let registry = DependencyRegistry::from_config(&manifest).unwrap();

    let scripts = registry
        .ordered_js_dependencies_of("page", &QueryOptions::new())
        .unwrap();
    assert_eq!(scripts, vec!["vendor/jquery.js", "widgets.js"]);
}

#[test]
fn test_reinit_replaces_previous_declarations() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("old-page", "old.js").unwrap();

    let manifest = DependConfig::new().with_dep("page", "new.js");
    registry.init(Some(&manifest)).unwrap();

    assert!(!registry.graph().has_node("old-page"));
    assert_eq!(registry.ordered_dependencies_of("page").unwrap(), vec!["new.js"]);
}

#[test]
fn test_failed_init_keeps_previous_state() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("page", "a.js").unwrap();

    let broken = DependConfig::new()
        .with_alias("x", "y")
        .with_alias("y", "x")
        .with_dep("other", "x");
    let err = registry.init(Some(&broken)).unwrap_err();

    assert!(matches!(err, DependError::CycleDetected { .. }));
    assert_eq!(registry.ordered_dependencies_of("page").unwrap(), vec!["a.js"]);
}

#[test]
fn test_graph_mutation_through_registry() {
    let mut registry = DependencyRegistry::new();
    registry.add_dependency("page", ["a.js", "b.js"]).unwrap();
    registry.add_dependency("a.js", "b.js").unwrap();

    registry.graph_mut().remove_dependency("page", "b.js");
    assert_eq!(
        registry.graph().direct_dependencies_of("page"),
        Some(vec!["a.js".to_string()])
    );
    assert_eq!(
        registry.ordered_dependencies_of("page").unwrap(),
        vec!["b.js", "a.js"]
    );
}
