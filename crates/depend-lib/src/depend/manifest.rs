//! Dependency manifests
//!
//! A manifest declares `aliases` and `deps` tables. Both keep the order in
//! which they were written, because `init` applies them in that order.
//!
//! ```yaml
//! aliases:
//!   jquery: jquery.js
//! deps:
//!   page: [app.js, jquery]
//!   app.js: jquery
//! ```

use crate::primitives::{DependError, Dependees, json_kind};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML parsing error: {source}")]
    Yaml {
        #[from]
        source: serde_saphyr::Error,
    },

    #[error("JSON parsing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("Unsupported manifest format: {path} (expected .yml, .yaml, .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid manifest: {source}")]
    Invalid {
        #[from]
        source: DependError,
    },
}

/// Declarations applied by `DependencyRegistry::init`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependConfig {
    /// `from -> to` alias declarations, in order
    pub aliases: Vec<(String, String)>,
    /// `depender -> dependees` declarations, in order
    pub deps: Vec<(String, Dependees)>,
}

impl DependConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, from: &str, to: &str) -> Self {
        self.aliases.push((from.to_string(), to.to_string()));
        self
    }

    pub fn with_dep(mut self, depender: &str, dependees: impl Into<Dependees>) -> Self {
        self.deps.push((depender.to_string(), dependees.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.deps.is_empty()
    }

    /// Build from a dynamic document; `null` is an empty manifest
    pub fn from_value(value: &Value) -> Result<Self, DependError> {
        let root = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(root) => root,
            other => {
                return Err(DependError::invalid_argument(format!(
                    "expected the manifest to be a mapping, but received {}",
                    json_kind(other)
                )));
            }
        };

        let mut config = Self::default();

        if let Some(aliases) = section(root, "aliases")? {
            for (from, to) in aliases {
                let to = to.as_str().ok_or_else(|| {
                    DependError::invalid_argument(format!(
                        "expected alias '{}' to target a string, but received {}",
                        from,
                        json_kind(to)
                    ))
                })?;
                config.aliases.push((from.clone(), to.to_string()));
            }
        }

        if let Some(deps) = section(root, "deps")? {
            for (depender, dependees) in deps {
                config
                    .deps
                    .push((depender.clone(), Dependees::try_from(dependees)?));
            }
        }

        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        // An empty YAML stream has no document at all
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_saphyr::from_str(content)?;
        Ok(Self::from_value(&value)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let value: Value = toml::from_str(content)?;
        Ok(Self::from_value(&value)?)
    }

    /// Load a manifest, choosing the parser from the file extension
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest: {}", path.display());

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ManifestError> = match extension.as_deref() {
            Some("yml") | Some("yaml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(ManifestError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = parse(&content)?;
        debug!(
            aliases = config.aliases.len(),
            deps = config.deps.len(),
            "Manifest loaded"
        );
        Ok(config)
    }
}

/// An optional mapping-valued section of the manifest root
fn section<'a>(root: &'a Map<String, Value>, key: &str) -> Result<Option<&'a Map<String, Value>>, DependError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(table)) => Ok(Some(table)),
        Some(other) => Err(DependError::invalid_argument(format!(
            "expected '{}' to be a mapping, but received {}",
            key,
            json_kind(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}
