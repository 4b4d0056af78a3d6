//! E2E tests across manifest formats
//!
//! Each supported format describes the same application and must produce
//! identical results.

use anyhow::Result;
use depend_lib::application::Commands;
use depend_tests::TestEnvironment;
use depend_tests::fixtures::{BACKBONE_APP_SCRIPTS, backbone_app_manifests};

#[test]
fn e2e_every_format_orders_the_same_scripts() -> Result<()> {
    for (file_name, content) in backbone_app_manifests() {
        let env = TestEnvironment::new()?;
        let manifest = env.write_manifest(file_name, content)?;

        let scripts = env.run_list(
            &manifest,
            Commands::Resources {
                start: "page".to_string(),
                exclude: Vec::new(),
                extension: ".js".to_string(),
            },
        )?;

        assert_eq!(scripts, BACKBONE_APP_SCRIPTS, "format: {}", file_name);
    }
    Ok(())
}

#[test]
fn e2e_every_format_keeps_declaration_order() -> Result<()> {
    for (file_name, content) in backbone_app_manifests() {
        let env = TestEnvironment::new()?;
        let manifest = env.write_manifest(file_name, content)?;

        let overall = env.run_list(&manifest, Commands::Overall { leaves: false })?;

        assert_eq!(
            overall,
            vec![
                "underscore.js",
                "jquery.js",
                "backbone.js",
                "my-backbone-app.js",
                "page",
                "admin.js",
                "admin.css",
                "admin",
            ],
            "format: {}",
            file_name
        );
    }
    Ok(())
}

#[test]
fn e2e_empty_manifests_are_accepted() -> Result<()> {
    for (file_name, content) in [("depend.yml", ""), ("depend.json", "{}"), ("depend.toml", "")] {
        let env = TestEnvironment::new()?;
        let manifest = env.write_manifest(file_name, content)?;

        let overall = env.run_list(&manifest, Commands::Overall { leaves: false })?;
        assert!(overall.is_empty(), "format: {}", file_name);
    }
    Ok(())
}
