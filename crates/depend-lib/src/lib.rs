//! # depend Library
//!
//! Load-order resolution for interdependent resources.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`graph`] - Dependency graph with closure queries and cycle detection
//! - [`depend`] - Aliases, registration, ordered queries and manifests
//! - [`logger`] - Structured logging
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use depend_lib::{DependencyRegistry, QueryOptions};
//!
//! let mut registry = DependencyRegistry::new();
//! registry.add_alias("jquery", "jquery-3.7.js").unwrap();
//! registry.add_dependency("app.js", "jquery").unwrap();
//! registry.add_dependency("page", ["app.js", "style.css"]).unwrap();
//!
//! let scripts = registry
//!     .ordered_js_dependencies_of("page", &QueryOptions::new())
//!     .unwrap();
//! assert_eq!(scripts, vec!["jquery-3.7.js", "app.js"]);
//! ```

pub mod application;
pub mod depend;
pub mod graph;
pub mod logger;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use depend::{
    AliasTable, DependConfig, DependencyRegistry, ManifestError, QueryOptions,
    render_as_script_tags,
};
pub use graph::DependencyGraph;
pub use logger::Logger;
pub use primitives::{
    ColorIntent, ConfigError, DependError, Dependees, LogFormat, LogLevel, LogOutput,
    LoggerError, OutputFormat,
};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Command output follows the same color decision as logs
    console::set_colors_enabled(config.app_config.color.resolve(LogOutput::Stdout));
    Logger::init(config.app_config.to_logger_config())?;

    // Execute the command
    execute_command(config)
}
