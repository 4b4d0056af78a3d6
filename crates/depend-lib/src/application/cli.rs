use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// depend CLI - dependency load-order resolution
#[derive(Debug, Clone, Parser)]
#[command(name = "depend")]
#[command(about = "Resolve the load order of interdependent resources")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depend commands
    #[command(subcommand)]
    pub command: Commands,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Commands,
}

/// Available depend commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Everything a resource depends on, in load order
    Order {
        /// Resource or alias to resolve
        start: String,
    },

    /// Ordered dependencies of a resource with a given suffix
    Resources {
        /// Resource or alias to resolve
        start: String,

        /// Drop everything these resources depend on (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,

        /// Keep only names ending with this suffix
        #[arg(short, long, default_value = crate::depend::JS_SUFFIX)]
        extension: String,
    },

    /// Ordered script dependencies rendered as <script> tags
    Tags {
        /// Resource or alias to resolve
        start: String,

        /// Drop everything these resources depend on (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,
    },

    /// Processing order for every declared resource
    Overall {
        /// Only resources that depend on nothing
        #[arg(short, long)]
        leaves: bool,
    },

    /// Transitive dependencies of a resource
    Deps {
        /// Resource or alias to inspect
        name: String,

        /// Only dependencies that depend on nothing
        #[arg(short, long)]
        leaves: bool,
    },

    /// Transitive dependants of a resource
    Dependants {
        /// Resource or alias to inspect
        name: String,

        /// Only dependants nothing else depends on
        #[arg(short, long)]
        leaves: bool,
    },

    /// Canonical name of a resource after alias resolution
    Resolve {
        /// Name to resolve
        name: String,
    },

    /// Validate the manifest and report dependency cycles
    Check,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
