//! Binary-level tests for the depend CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
aliases:
  jquery: jquery.js
deps:
  app.js: jquery
  page: [app.js, style.css]
"#;

/// A working directory holding `depend.yml`, isolated from the caller's env
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("depend.yml"), MANIFEST).unwrap();
    dir
}

fn depend(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_depend"));
    cmd.current_dir(dir.path())
        .env_remove("DEPEND_MANIFEST")
        .env_remove("DEPEND_OUTPUT")
        .env_remove("DEPEND_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_order_uses_discovered_manifest() {
    let dir = workspace();
    depend(&dir)
        .args(["order", "page"])
        .assert()
        .success()
        .stdout("jquery.js\napp.js\nstyle.css\n");
}

#[test]
fn test_tags_command() {
    let dir = workspace();
    depend(&dir)
        .args(["tags", "page"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<script src=\"jquery.js\"></script>\n<script src=\"app.js\"></script>",
        ))
        .stdout(predicate::str::contains("style.css").not());
}

#[test]
fn test_json_output_flag() {
    let dir = workspace();
    depend(&dir)
        .args(["--output", "json", "resources", "page"])
        .assert()
        .success()
        .stdout("[\"jquery.js\",\"app.js\"]\n");
}

#[test]
fn test_manifest_from_environment() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("deps.json");
    fs::write(&manifest, r#"{"deps": {"b": "a"}}"#).unwrap();

    depend(&dir)
        .env("DEPEND_MANIFEST", &manifest)
        .args(["overall"])
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_resolve_alias() {
    let dir = workspace();
    depend(&dir)
        .args(["resolve", "jquery"])
        .assert()
        .success()
        .stdout("jquery.js\n");
}

#[test]
fn test_check_reports_summary() {
    let dir = workspace();
    depend(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "4 resources, 3 dependencies, 1 aliases, no cycles",
        ));
}

#[test]
fn test_check_fails_on_cycle() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("depend.yml"),
        "deps:\n  a: b\n  b: a\n",
    )
    .unwrap();

    depend(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency cycle found: a -> b -> a"));
}

#[test]
fn test_unknown_node_fails() {
    let dir = workspace();
    depend(&dir)
        .args(["deps", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node does not exist: missing"));
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    depend(&dir)
        .args(["overall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no manifest given"));
}

#[test]
fn test_subcommand_required() {
    let dir = workspace();
    depend(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
