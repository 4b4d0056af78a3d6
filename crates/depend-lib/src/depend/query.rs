//! Ordered dependency queries
//!
//! Answers "what must load before X, in what order, excluding what" by
//! combining the global order with X's transitive dependencies.

use super::registry::DependencyRegistry;
use super::sets;
use crate::primitives::{DependError, Dependees};
use tracing::debug;

/// Suffix of names treated as loadable scripts
pub const JS_SUFFIX: &str = ".js";

/// Options for filtered queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Starting points whose dependencies are removed from the result
    pub excluding: Option<Dependees>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding(excluding: impl Into<Dependees>) -> Self {
        Self {
            excluding: Some(excluding.into()),
        }
    }
}

impl From<Vec<String>> for QueryOptions {
    /// An empty list means no exclusions
    fn from(excluding: Vec<String>) -> Self {
        if excluding.is_empty() {
            Self::new()
        } else {
            Self::excluding(excluding)
        }
    }
}

impl DependencyRegistry {
    /// Everything `start` transitively depends on, in global load order
    pub fn ordered_dependencies_of(&self, start: &str) -> Result<Vec<String>, DependError> {
        let start = self.resolve_alias(start)?;
        let overall = self.graph.overall_order(false)?;
        let dependencies = self.graph.dependencies_of(&start, false)?;

        Ok(sets::intersection(&overall, &dependencies))
    }

    /// Ordered `.js` dependencies of `start`, minus those of `options.excluding`
    pub fn ordered_js_dependencies_of(
        &self,
        start: &str,
        options: &QueryOptions,
    ) -> Result<Vec<String>, DependError> {
        self.ordered_resources_of(start, JS_SUFFIX, options)
    }

    /// Ordered dependencies of `start` whose names end with `suffix`.
    ///
    /// Anything the excluded starting points depend on is dropped, so a page
    /// can skip what another already loaded.
    pub fn ordered_resources_of(
        &self,
        start: &str,
        suffix: &str,
        options: &QueryOptions,
    ) -> Result<Vec<String>, DependError> {
        let ordered = self.ordered_dependencies_of(start)?;

        let mut excluded: Vec<String> = Vec::new();
        if let Some(excluding) = &options.excluding {
            for name in excluding.as_slice() {
                let resolved = self.resolve_alias(name)?;
                excluded = sets::union(&excluded, &self.ordered_dependencies_of(&resolved)?);
            }
        }

        let resources: Vec<String> = ordered
            .into_iter()
            .filter(|name| name.ends_with(suffix))
            .collect();
        let result = sets::exclusion(&resources, &excluded);

        debug!(
            start,
            suffix,
            excluded = excluded.len(),
            count = result.len(),
            "Resolved ordered resources"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    include!("query.test.rs");
}
