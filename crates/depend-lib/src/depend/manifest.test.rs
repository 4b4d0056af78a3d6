// Tests for manifest parsing and loading

use super::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Write a manifest file into a temp dir and return its path
fn write_manifest(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_null_document_is_empty_manifest() {
    let config = DependConfig::from_value(&Value::Null).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_from_value_keeps_declaration_order() {
    let value = json!({
        "aliases": { "jquery": "jquery.js", "app": "app.js" },
        "deps": {
            "zeta": "app",
            "alpha": ["jquery", "underscore.js"],
        }
    });

    let config = DependConfig::from_value(&value).unwrap();
    assert_eq!(
        config.aliases,
        vec![
            ("jquery".to_string(), "jquery.js".to_string()),
            ("app".to_string(), "app.js".to_string()),
        ]
    );
    assert_eq!(config.deps[0].0, "zeta");
    assert_eq!(config.deps[1].0, "alpha");
    assert_eq!(config.deps[1].1, Dependees::from(["jquery", "underscore.js"]));
}

#[test]
fn test_rejects_non_string_alias_target() {
    let value = json!({ "aliases": { "a.js": 69 } });
    assert!(matches!(
        DependConfig::from_value(&value),
        Err(DependError::InvalidArgument { .. })
    ));
}

#[test]
fn test_rejects_malformed_dependees() {
    for bad in [json!(69), json!({ "b.js": "c.js" }), json!(null)] {
        let value = json!({ "deps": { "a": bad } });
        assert!(matches!(
            DependConfig::from_value(&value),
            Err(DependError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_rejects_non_mapping_sections() {
    assert!(DependConfig::from_value(&json!(["a"])).is_err());
    assert!(DependConfig::from_value(&json!({ "deps": ["a", "b"] })).is_err());
    assert!(DependConfig::from_value(&json!({ "deps": null })).unwrap().is_empty());
}

#[test]
fn test_yaml_manifest() {
    let yaml = r#"
aliases:
  jquery: jquery.js
deps:
  page: [app.js, jquery]
  app.js: jquery
"#;
    let config = DependConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.aliases.len(), 1);
    assert_eq!(
        config.deps,
        vec![
            ("page".to_string(), Dependees::from(["app.js", "jquery"])),
            ("app.js".to_string(), Dependees::from("jquery")),
        ]
    );
}

#[test]
fn test_toml_manifest() {
    let toml = r#"
[aliases]
jquery = "jquery.js"

[deps]
page = ["app.js", "jquery"]
"app.js" = "jquery"
"#;
    let config = DependConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.aliases[0], ("jquery".to_string(), "jquery.js".to_string()));
    assert_eq!(config.deps.len(), 2);
    assert_eq!(config.deps[1].1, Dependees::from("jquery"));
}

#[test]
fn test_load_dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let json_path = write_manifest(&dir, "deps.json", r#"{"deps": {"page": "a.js"}}"#);
    let yaml_path = write_manifest(&dir, "deps.YAML", "deps:\n  page: a.js\n");

    let from_json = DependConfig::load(&json_path).unwrap();
    let from_yaml = DependConfig::load(&yaml_path).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json, DependConfig::new().with_dep("page", "a.js"));
}

#[test]
fn test_load_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "deps.ini", "page = a.js");
    assert!(matches!(
        DependConfig::load(&path),
        Err(ManifestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yml");
    assert!(matches!(
        DependConfig::load(&path),
        Err(ManifestError::Io { .. })
    ));
}

#[test]
fn test_invalid_shape_surfaces_as_invalid_manifest() {
    let err = DependConfig::from_json_str(r#"{"deps": {"a": 3}}"#).unwrap_err();
    assert!(matches!(
        err,
        ManifestError::Invalid {
            source: DependError::InvalidArgument { .. }
        }
    ));
}
