//! Configuration loading
//!
//! Coordinates loading configuration from `.env` files, the process
//! environment and the command line into one validated [`CliConfig`].

use crate::primitives::{ColorIntent, ConfigError};
use clap::Parser;
use std::path::Path;

use super::{
    cli::{Cli, CliConfig},
    env::EnvironmentConfig,
};

/// Files read into the process environment before arguments are parsed
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` files; missing files are skipped
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        if let Err(e) = dotenvy::from_filename(env_file) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        // 1. .env files feed the env-backed arguments below
        load_env_files()?;

        // 2. Defaults, env vars and CLI arguments are layered by clap
        let cli = Cli::parse();

        // 3. Standard color variables apply unless --color was explicit
        let env_config = EnvironmentConfig::load()?;

        let cwd = std::env::current_dir().map_err(|e| ConfigError::ValidationFailed {
            reason: format!("failed to get current directory: {}", e),
        })?;
        Self::from_cli(cli, &env_config, &cwd)
    }

    /// Finish a parsed command line against an environment and working directory
    pub fn from_cli(cli: Cli, env: &EnvironmentConfig, dir: &Path) -> Result<Self, ConfigError> {
        let mut app_config = cli.config;
        if app_config.color == ColorIntent::Auto {
            if let Some(forced) = env.color_override() {
                app_config.color = forced;
            }
        }

        // 4. Post-process and validate
        app_config.validate_in(dir)?;

        Ok(Self {
            app_config,
            command: cli.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
