//! Isolated test environment for E2E testing
//!
//! Creates a temporary working directory, writes manifests into it and runs
//! commands against them without touching the process environment.

use anyhow::Result;
use depend_lib::application::commands::execute_command_with_writer;
use depend_lib::application::{AppConfig, Commands};
use depend_lib::primitives::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding one or more manifests
pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    /// Path to the test environment root
    pub root_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new empty test environment
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().to_path_buf();
        Ok(Self {
            temp_dir,
            root_path,
        })
    }

    /// Write a manifest into the environment root
    pub fn write_manifest(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root_path.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Configuration pointing at `manifest`, printing in `output` format
    pub fn config(&self, manifest: &Path, output: OutputFormat) -> AppConfig {
        AppConfig {
            manifest: Some(manifest.to_path_buf()),
            output,
            ..AppConfig::default()
        }
    }

    /// Run a command and capture what it prints
    pub fn run(&self, config: &AppConfig, command: Commands) -> Result<String> {
        let mut out: Vec<u8> = Vec::new();
        execute_command_with_writer(config, command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Run a command with JSON output and decode the printed list
    pub fn run_list(&self, manifest: &Path, command: Commands) -> Result<Vec<String>> {
        let config = self.config(manifest, OutputFormat::Json);
        let printed = self.run(&config, command)?;
        Ok(serde_json::from_str(&printed)?)
    }
}
