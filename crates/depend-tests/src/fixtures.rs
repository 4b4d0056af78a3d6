//! Manifest fixtures for E2E tests
//!
//! The same aliased application is written in every supported manifest
//! format so that format-specific tests can share expectations.

/// Load order of the application's scripts
pub const BACKBONE_APP_SCRIPTS: [&str; 4] = [
    "underscore.js",
    "jquery.js",
    "backbone.js",
    "my-backbone-app.js",
];

pub const BACKBONE_APP_YAML: &str = r#"
aliases:
  jquery: jquery.js
  backbone: backbone.js
  underscore: underscore.js
  my-backbone-app: my-backbone-app.js
deps:
  backbone: [underscore, jquery]
  my-backbone-app: [backbone, jquery]
  page: my-backbone-app
  admin: [my-backbone-app, admin.js, admin.css]
"#;

pub const BACKBONE_APP_JSON: &str = r#"{
  "aliases": {
    "jquery": "jquery.js",
    "backbone": "backbone.js",
    "underscore": "underscore.js",
    "my-backbone-app": "my-backbone-app.js"
  },
  "deps": {
    "backbone": ["underscore", "jquery"],
    "my-backbone-app": ["backbone", "jquery"],
    "page": "my-backbone-app",
    "admin": ["my-backbone-app", "admin.js", "admin.css"]
  }
}"#;

pub const BACKBONE_APP_TOML: &str = r#"
[aliases]
jquery = "jquery.js"
backbone = "backbone.js"
underscore = "underscore.js"
my-backbone-app = "my-backbone-app.js"

[deps]
backbone = ["underscore", "jquery"]
my-backbone-app = ["backbone", "jquery"]
page = "my-backbone-app"
admin = ["my-backbone-app", "admin.js", "admin.css"]
"#;

/// Three resources that depend on each other in a loop
pub const CYCLIC_YAML: &str = r#"
deps:
  a.js: b.js
  b.js: c.js
  c.js: a.js
"#;

/// Every (file name, content) pair describing the application
pub fn backbone_app_manifests() -> [(&'static str, &'static str); 3] {
    [
        ("depend.yml", BACKBONE_APP_YAML),
        ("depend.json", BACKBONE_APP_JSON),
        ("depend.toml", BACKBONE_APP_TOML),
    ]
}
