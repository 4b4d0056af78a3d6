//! Conventional color variables
//!
//! `NO_COLOR`, `FORCE_COLOR`, `CLICOLOR` and `CI` can override an `auto`
//! color setting. An explicit `--color` or `DEPEND_COLOR` is never overridden.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Color-related variables read from the process environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub clicolor: Option<String>,
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Self>()?)
    }

    /// Color intent forced by the environment, if any.
    ///
    /// CI wins, then a recognised `FORCE_COLOR`, then `NO_COLOR` or
    /// `CLICOLOR=0`.
    pub fn color_override(&self) -> Option<ColorIntent> {
        if self.ci.is_some() {
            return Some(ColorIntent::Never);
        }

        if let Some(forced) = self.force_color.as_deref().and_then(force_color_intent) {
            return Some(forced);
        }

        let no_color = self.no_color.as_deref().is_some_and(|v| !v.is_empty());
        if no_color || self.clicolor.as_deref() == Some("0") {
            return Some(ColorIntent::Never);
        }

        None
    }
}

fn force_color_intent(value: &str) -> Option<ColorIntent> {
    match value {
        "0" | "false" => Some(ColorIntent::Never),
        "1" | "2" | "3" | "true" => Some(ColorIntent::Always),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
