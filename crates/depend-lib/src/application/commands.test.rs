use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE_MANIFEST: &str = r#"
aliases:
  jquery: jquery-3.7.js
  ui: app/ui.js
deps:
  app/ui.js: [jquery, app/core.js, app/ui.css]
  app/core.js: jquery
  admin.html: [ui, admin.js]
  admin.js: app/core.js
  index.html: ui
"#;

struct Fixture {
    _dir: TempDir,
    config: AppConfig,
}

impl Fixture {
    fn new(file_name: &str, content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();

        let config = AppConfig {
            manifest: Some(path),
            ..AppConfig::default()
        };
        Self { _dir: dir, config }
    }

    fn json(mut self) -> Self {
        self.config.output = OutputFormat::Json;
        self
    }

    fn run(&self, command: Commands) -> Result<String> {
        let mut out: Vec<u8> = Vec::new();
        execute_command_with_writer(&self.config, command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}

fn page() -> Fixture {
    Fixture::new("depend.yml", PAGE_MANIFEST)
}

// ===== HANDLE_ORDER TESTS =====

mod handle_order_tests {
    use super::*;

    #[test]
    fn it_prints_dependencies_in_load_order() {
        let output = page()
            .run(Commands::Order {
                start: "index.html".to_string(),
            })
            .unwrap();

        assert_eq!(
            output,
            "jquery-3.7.js\napp/core.js\napp/ui.css\napp/ui.js\n"
        );
    }

    #[test]
    fn it_prints_json_arrays() {
        let output = page()
            .json()
            .run(Commands::Order {
                start: "ui".to_string(),
            })
            .unwrap();

        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec!["jquery-3.7.js", "app/core.js", "app/ui.css"]);
    }

    #[test]
    fn it_fails_for_unknown_start() {
        let err = page()
            .run(Commands::Order {
                start: "missing.html".to_string(),
            })
            .unwrap_err();

        assert!(format!("{:#}", err).contains("missing.html"));
    }
}

// ===== HANDLE_RESOURCES TESTS =====

mod handle_resources_tests {
    use super::*;

    #[test]
    fn it_filters_by_extension() {
        let output = page()
            .run(Commands::Resources {
                start: "index.html".to_string(),
                exclude: Vec::new(),
                extension: ".css".to_string(),
            })
            .unwrap();

        assert_eq!(output, "app/ui.css\n");
    }

    #[test]
    fn it_excludes_what_other_pages_load() {
        let output = page()
            .run(Commands::Resources {
                start: "admin.html".to_string(),
                exclude: vec!["index.html".to_string()],
                extension: ".js".to_string(),
            })
            .unwrap();

        assert_eq!(output, "admin.js\n");
    }
}

// ===== HANDLE_TAGS TESTS =====

mod handle_tags_tests {
    use super::*;

    #[test]
    fn it_renders_script_tags() {
        let output = page()
            .run(Commands::Tags {
                start: "index.html".to_string(),
                exclude: Vec::new(),
            })
            .unwrap();

        assert_eq!(
            output,
            "<script src=\"jquery-3.7.js\"></script>\n\
             <script src=\"app/core.js\"></script>\n\
             <script src=\"app/ui.js\"></script>\n"
        );
    }

    #[test]
    fn it_prints_nothing_when_everything_is_excluded() {
        let output = page()
            .run(Commands::Tags {
                start: "index.html".to_string(),
                exclude: vec!["admin.html".to_string()],
            })
            .unwrap();

        assert!(output.is_empty());
    }
}

// ===== HANDLE_OVERALL TESTS =====

mod handle_overall_tests {
    use super::*;

    #[test]
    fn it_orders_every_resource() {
        let output = page().json().run(Commands::Overall { leaves: false }).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.len(), 7);
        let pos = |name: &str| parsed.iter().position(|n| n == name).unwrap();
        assert!(pos("jquery-3.7.js") < pos("app/core.js"));
        assert!(pos("app/core.js") < pos("admin.js"));
        assert!(pos("app/ui.js") < pos("index.html"));
    }

    #[test]
    fn it_lists_only_leaves() {
        let output = page().run(Commands::Overall { leaves: true }).unwrap();
        assert_eq!(output, "jquery-3.7.js\napp/ui.css\n");
    }
}

// ===== HANDLE_DEPS / HANDLE_DEPENDANTS TESTS =====

mod handle_closure_tests {
    use super::*;

    #[test]
    fn it_resolves_aliases_before_querying() {
        let output = page()
            .run(Commands::Deps {
                name: "ui".to_string(),
                leaves: true,
            })
            .unwrap();

        assert_eq!(output, "jquery-3.7.js\napp/ui.css\n");
    }

    #[test]
    fn it_frames_alias_cycles_with_the_command() {
        let fixture = Fixture::new(
            "depend.yml",
            "aliases:\n  x: y\n  y: x\ndeps:\n  page: a.js\n",
        );

        for command in [
            Commands::Deps {
                name: "x".to_string(),
                leaves: false,
            },
            Commands::Dependants {
                name: "x".to_string(),
                leaves: false,
            },
        ] {
            let err = fixture.run(command).unwrap_err();
            assert_eq!(err.to_string(), "Failed to resolve alias 'x'");
            assert!(format!("{:#}", err).contains("Dependency cycle found: x -> y -> x"));
        }
    }

    #[test]
    fn it_lists_dependants() {
        let output = page()
            .run(Commands::Dependants {
                name: "app/core.js".to_string(),
                leaves: true,
            })
            .unwrap();

        assert_eq!(output, "admin.html\nindex.html\n");
    }
}

// ===== HANDLE_RESOLVE TESTS =====

mod handle_resolve_tests {
    use super::*;

    #[test]
    fn it_prints_the_canonical_name() {
        let output = page()
            .run(Commands::Resolve {
                name: "jquery".to_string(),
            })
            .unwrap();
        assert_eq!(output, "jquery-3.7.js\n");
    }

    #[test]
    fn it_passes_unaliased_names_through() {
        let output = page()
            .json()
            .run(Commands::Resolve {
                name: "plain.js".to_string(),
            })
            .unwrap();
        assert_eq!(output, "\"plain.js\"\n");
    }
}

// ===== HANDLE_CHECK TESTS =====

mod handle_check_tests {
    use super::*;

    #[test]
    fn it_reports_an_acyclic_manifest() {
        let output = page().json().run(Commands::Check).unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["resources"], 7);
        assert_eq!(report["dependencies"], 8);
        assert_eq!(report["aliases"], 2);
        assert_eq!(report["acyclic"], true);
    }

    #[test]
    fn it_reports_the_cycle_path() {
        let fixture = Fixture::new(
            "depend.json",
            r#"{"deps": {"a": "b", "b": "c", "c": "a"}}"#,
        );

        let err = fixture.run(Commands::Check).unwrap_err();
        assert!(
            err.to_string().contains("a -> b -> c -> a"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn it_reports_cycles_no_root_reaches() {
        let fixture = Fixture::new(
            "depend.yml",
            "deps:\n  page: a.js\n  x.js: y.js\n  y.js: x.js\n",
        );

        let err = fixture.run(Commands::Check).unwrap_err();
        assert_eq!(err.to_string(), "Dependency cycle found: x.js -> y.js -> x.js");

        // Queries that never touch the cycle still succeed
        let output = fixture
            .run(Commands::Order {
                start: "page".to_string(),
            })
            .unwrap();
        assert_eq!(output, "a.js\n");
    }

    #[test]
    fn it_rejects_an_unsupported_manifest() {
        let fixture = Fixture::new("depend.ini", "a = b");
        let err = fixture.run(Commands::Check).unwrap_err();
        assert!(format!("{:#}", err).contains("Unsupported manifest format"));
    }

    #[test]
    fn it_reports_alias_cycles_while_loading() {
        let fixture = Fixture::new(
            "depend.toml",
            "[aliases]\nx = \"y\"\ny = \"x\"\n\n[deps]\npage = \"x\"\n",
        );

        let err = fixture.run(Commands::Check).unwrap_err();
        assert!(format!("{:#}", err).contains("Dependency cycle found"));
    }
}
