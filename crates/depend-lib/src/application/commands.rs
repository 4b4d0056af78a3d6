//! Command execution handlers
//!
//! Every handler loads the manifest named by the configuration into a fresh
//! [`DependencyRegistry`], runs one query and prints the result.

use crate::application::{CliConfig, Commands, config::AppConfig};
use crate::depend::{
    DependConfig, DependencyRegistry, JS_SUFFIX, QueryOptions, render_as_script_tags,
    render_script_tag,
};
use crate::primitives::{DependError, OutputFormat};
use anyhow::{Context, Result, anyhow};
use console::style;
use std::io::Write;
use tracing::{debug, info};

/// Execute a parsed command, printing results to stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command_with_writer(&config.app_config, config.command, &mut out)
}

/// Execute a specific command against a provided writer (for testing)
pub fn execute_command_with_writer(
    config: &AppConfig,
    command: Commands,
    out: &mut dyn Write,
) -> Result<()> {
    let registry = load_registry(config)?;
    let format = config.output;

    match command {
        Commands::Order { start } => handle_order(&registry, format, out, &start),
        Commands::Resources {
            start,
            exclude,
            extension,
        } => handle_resources(&registry, format, out, &start, exclude, &extension),
        Commands::Tags { start, exclude } => handle_tags(&registry, format, out, &start, exclude),
        Commands::Overall { leaves } => handle_overall(&registry, format, out, leaves),
        Commands::Deps { name, leaves } => handle_deps(&registry, format, out, &name, leaves),
        Commands::Dependants { name, leaves } => {
            handle_dependants(&registry, format, out, &name, leaves)
        }
        Commands::Resolve { name } => handle_resolve(&registry, format, out, &name),
        Commands::Check => handle_check(&registry, format, out),
    }
}

fn load_registry(config: &AppConfig) -> Result<DependencyRegistry> {
    let path = config
        .manifest
        .as_deref()
        .ok_or_else(|| anyhow!("No dependency manifest configured"))?;

    let manifest = DependConfig::load(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;

    let mut registry = DependencyRegistry::new();
    registry
        .init(Some(&manifest))
        .with_context(|| format!("Failed to apply manifest {}", path.display()))?;
    Ok(registry)
}

fn handle_order(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    start: &str,
) -> Result<()> {
    let ordered = registry
        .ordered_dependencies_of(start)
        .with_context(|| format!("Failed to order dependencies of '{}'", start))?;
    write_list(out, format, &ordered)
}

fn handle_resources(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    start: &str,
    exclude: Vec<String>,
    extension: &str,
) -> Result<()> {
    let options = QueryOptions::from(exclude);
    let resources = registry
        .ordered_resources_of(start, extension, &options)
        .with_context(|| format!("Failed to resolve '{}' resources of '{}'", extension, start))?;
    write_list(out, format, &resources)
}

fn handle_tags(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    start: &str,
    exclude: Vec<String>,
) -> Result<()> {
    let options = QueryOptions::from(exclude);
    let scripts = registry
        .ordered_js_dependencies_of(start, &options)
        .with_context(|| format!("Failed to resolve scripts of '{}'", start))?;
    debug!(start, scripts = scripts.len(), "Rendering {} tags", JS_SUFFIX);

    match format {
        OutputFormat::Text => {
            if !scripts.is_empty() {
                writeln!(out, "{}", render_as_script_tags(&scripts))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let tags: Vec<String> = scripts.iter().map(|s| render_script_tag(s)).collect();
            write_list(out, format, &tags)
        }
    }
}

fn handle_overall(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    leaves: bool,
) -> Result<()> {
    let ordered = registry
        .graph()
        .overall_order(leaves)
        .context("Failed to compute overall order")?;
    write_list(out, format, &ordered)
}

fn handle_deps(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    name: &str,
    leaves: bool,
) -> Result<()> {
    let resolved = registry
        .resolve_alias(name)
        .with_context(|| format!("Failed to resolve alias '{}'", name))?;
    let deps = registry
        .graph()
        .dependencies_of(&resolved, leaves)
        .with_context(|| format!("Failed to resolve dependencies of '{}'", name))?;
    write_list(out, format, &deps)
}

fn handle_dependants(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    name: &str,
    leaves: bool,
) -> Result<()> {
    let resolved = registry
        .resolve_alias(name)
        .with_context(|| format!("Failed to resolve alias '{}'", name))?;
    let dependants = registry
        .graph()
        .dependants_of(&resolved, leaves)
        .with_context(|| format!("Failed to resolve dependants of '{}'", name))?;
    write_list(out, format, &dependants)
}

fn handle_resolve(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
    name: &str,
) -> Result<()> {
    let canonical = registry
        .resolve_alias(name)
        .with_context(|| format!("Failed to resolve alias '{}'", name))?;

    match format {
        OutputFormat::Text => writeln!(out, "{}", canonical)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &canonical)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn handle_check(
    registry: &DependencyRegistry,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let graph = registry.graph();

    if let Some(path) = graph.find_cycle() {
        return Err(DependError::CycleDetected { path }.into());
    }

    let nodes = graph.node_count();
    let edges = graph.edge_count();
    let aliases = registry.aliases().len();
    info!(nodes, edges, aliases, "Manifest check passed");

    match format {
        OutputFormat::Text => writeln!(
            out,
            "{} {} resources, {} dependencies, {} aliases, no cycles",
            style("✓").green(),
            nodes,
            edges,
            aliases
        )?,
        OutputFormat::Json => {
            let report = serde_json::json!({
                "resources": nodes,
                "dependencies": edges,
                "aliases": aliases,
                "acyclic": true,
            });
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_list(out: &mut dyn Write, format: OutputFormat, items: &[String]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
