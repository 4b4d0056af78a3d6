//! E2E tests for the query commands
//!
//! These run the command handlers against manifests written to a temporary
//! directory, the same way the binary does after argument parsing.

use anyhow::Result;
use depend_lib::application::Commands;
use depend_lib::primitives::OutputFormat;
use depend_tests::TestEnvironment;
use depend_tests::fixtures::{BACKBONE_APP_YAML, CYCLIC_YAML};

#[test]
fn e2e_admin_page_skips_scripts_the_main_page_loaded() -> Result<()> {
    let env = TestEnvironment::new()?;
    let manifest = env.write_manifest("depend.yml", BACKBONE_APP_YAML)?;

    let scripts = env.run_list(
        &manifest,
        Commands::Resources {
            start: "admin".to_string(),
            exclude: vec!["page".to_string()],
            extension: ".js".to_string(),
        },
    )?;

    assert_eq!(scripts, vec!["admin.js"]);
    Ok(())
}

#[test]
fn e2e_stylesheets_are_selected_by_extension() -> Result<()> {
    let env = TestEnvironment::new()?;
    let manifest = env.write_manifest("depend.yml", BACKBONE_APP_YAML)?;

    let styles = env.run_list(
        &manifest,
        Commands::Resources {
            start: "admin".to_string(),
            exclude: Vec::new(),
            extension: ".css".to_string(),
        },
    )?;

    assert_eq!(styles, vec!["admin.css"]);
    Ok(())
}

#[test]
fn e2e_tags_render_in_load_order() -> Result<()> {
    let env = TestEnvironment::new()?;
    let manifest = env.write_manifest("depend.yml", BACKBONE_APP_YAML)?;
    let config = env.config(&manifest, OutputFormat::Text);

    let printed = env.run(
        &config,
        Commands::Tags {
            start: "page".to_string(),
            exclude: Vec::new(),
        },
    )?;

    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<script src=\"underscore.js\"></script>",
            "<script src=\"jquery.js\"></script>",
            "<script src=\"backbone.js\"></script>",
            "<script src=\"my-backbone-app.js\"></script>",
        ]
    );
    Ok(())
}

#[test]
fn e2e_dependants_of_a_library() -> Result<()> {
    let env = TestEnvironment::new()?;
    let manifest = env.write_manifest("depend.yml", BACKBONE_APP_YAML)?;

    let dependants = env.run_list(
        &manifest,
        Commands::Dependants {
            name: "underscore".to_string(),
            leaves: true,
        },
    )?;

    assert_eq!(dependants, vec!["page", "admin"]);
    Ok(())
}

#[test]
fn e2e_cycles_fail_with_the_offending_path() -> Result<()> {
    let env = TestEnvironment::new()?;
    let manifest = env.write_manifest("depend.yml", CYCLIC_YAML)?;
    let config = env.config(&manifest, OutputFormat::Text);

    let err = env
        .run(
            &config,
            Commands::Order {
                start: "a.js".to_string(),
            },
        )
        .unwrap_err();

    assert!(
        format!("{:#}", err).contains("a.js -> b.js -> c.js -> a.js"),
        "unexpected error: {:#}",
        err
    );
    Ok(())
}
