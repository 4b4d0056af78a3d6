use super::*;
use crate::primitives::{ColorIntent, OutputFormat};

#[test]
fn test_parse_order_command() {
    let cli = Cli::try_parse_from(["depend", "order", "page"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Order {
            start: "page".to_string()
        }
    );
}

#[test]
fn test_resources_defaults_to_script_suffix() {
    let cli = Cli::try_parse_from(["depend", "resources", "page"]).unwrap();
    match cli.command {
        Commands::Resources {
            start,
            exclude,
            extension,
        } => {
            assert_eq!(start, "page");
            assert!(exclude.is_empty());
            assert_eq!(extension, ".js");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_repeated_exclude_flags() {
    let cli = Cli::try_parse_from([
        "depend", "tags", "page", "-x", "common", "--exclude", "vendor",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Commands::Tags {
            start: "page".to_string(),
            exclude: vec!["common".to_string(), "vendor".to_string()],
        }
    );
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = Cli::try_parse_from([
        "depend",
        "--manifest",
        "deps.yml",
        "--output",
        "json",
        "--color",
        "never",
        "overall",
        "--leaves",
    ])
    .unwrap();

    assert_eq!(
        cli.config.manifest.as_deref(),
        Some(std::path::Path::new("deps.yml"))
    );
    assert_eq!(cli.config.output, OutputFormat::Json);
    assert_eq!(cli.config.color, ColorIntent::Never);
    assert_eq!(cli.command, Commands::Overall { leaves: true });
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["depend"]).is_err());
}

#[test]
fn test_invalid_output_format_rejected() {
    assert!(Cli::try_parse_from(["depend", "--output", "xml", "check"]).is_err());
}
