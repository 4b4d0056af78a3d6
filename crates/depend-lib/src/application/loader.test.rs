use super::*;
use crate::application::{AppConfig, Commands};
use crate::primitives::OutputFormat;
use std::fs;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["depend"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_config_loading_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.output, OutputFormat::Text);
    assert!(config.manifest.is_none());
}

#[test]
fn test_explicit_manifest_is_kept() {
    let dir = TempDir::new().unwrap();
    let cli = parse(&["--manifest", "elsewhere.json", "check"]);

    let config = CliConfig::from_cli(cli, &EnvironmentConfig::default(), dir.path()).unwrap();
    assert_eq!(
        config.app_config.manifest.as_deref(),
        Some(Path::new("elsewhere.json"))
    );
    assert_eq!(config.command, Commands::Check);
}

#[test]
fn test_manifest_discovered_in_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("depend.json"), "{}").unwrap();
    fs::write(dir.path().join("depend.toml"), "").unwrap();

    let cli = parse(&["check"]);
    let config = CliConfig::from_cli(cli, &EnvironmentConfig::default(), dir.path()).unwrap();

    // depend.json comes before depend.toml in the candidate list
    assert_eq!(
        config.app_config.manifest,
        Some(dir.path().join("depend.json"))
    );
}

#[test]
fn test_missing_manifest_fails_validation() {
    let dir = TempDir::new().unwrap();
    let cli = parse(&["check"]);

    let result = CliConfig::from_cli(cli, &EnvironmentConfig::default(), dir.path());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_log_level_out_of_range() {
    let dir = TempDir::new().unwrap();
    let cli = parse(&["--manifest", "deps.yml", "--log-level", "9", "check"]);

    let result = CliConfig::from_cli(cli, &EnvironmentConfig::default(), dir.path());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_no_color_applies_to_auto() {
    let dir = TempDir::new().unwrap();
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let cli = parse(&["--manifest", "deps.yml", "check"]);
    let config = CliConfig::from_cli(cli, &env, dir.path()).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
}

#[test]
fn test_explicit_color_beats_environment() {
    let dir = TempDir::new().unwrap();
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let cli = parse(&["--manifest", "deps.yml", "--color", "always", "check"]);
    let config = CliConfig::from_cli(cli, &env, dir.path()).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Always);
}
