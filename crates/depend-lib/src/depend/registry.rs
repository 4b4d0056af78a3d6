//! Dependency registration
//!
//! [`DependencyRegistry`] owns the graph and the alias table together.
//! Declarations go through alias resolution and create nodes on demand, so
//! registering never fails because a name is unknown.

use super::alias::AliasTable;
use super::manifest::DependConfig;
use crate::graph::DependencyGraph;
use crate::primitives::{DependError, Dependees, ensure_plain_name};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct DependencyRegistry {
    pub(super) graph: DependencyGraph,
    pub(super) aliases: AliasTable,
}

impl DependencyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated from `config`
    pub fn from_config(config: &DependConfig) -> Result<Self, DependError> {
        let mut registry = Self::new();
        registry.apply(config)?;
        Ok(registry)
    }

    /// Discard every node, edge and alias, then apply `config` if given.
    ///
    /// Aliases are applied before dependencies, each in declaration order.
    /// If applying `config` fails the previous state is left untouched.
    pub fn init(&mut self, config: Option<&DependConfig>) -> Result<(), DependError> {
        let fresh = match config {
            Some(config) => Self::from_config(config)?,
            None => Self::new(),
        };
        *self = fresh;

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            aliases = self.aliases.len(),
            "Dependency registry initialized"
        );
        Ok(())
    }

    fn apply(&mut self, config: &DependConfig) -> Result<(), DependError> {
        for (from, to) in &config.aliases {
            self.add_alias(from, to)?;
        }
        for (depender, dependees) in &config.deps {
            self.add_dependency(depender, dependees.clone())?;
        }
        Ok(())
    }

    /// Register a one-way alias, replacing any previous target.
    ///
    /// Empty or whitespace-only names on either side fail with `InvalidArgument`.
    pub fn add_alias(&mut self, from: &str, to: &str) -> Result<(), DependError> {
        self.aliases.add(from, to)
    }

    /// Drop the alias declared for `from`, returning its direct target
    pub fn remove_alias(&mut self, from: &str) -> Option<String> {
        self.aliases.remove(from)
    }

    /// Canonical name for `name` after following every alias
    pub fn resolve_alias(&self, name: &str) -> Result<String, DependError> {
        self.aliases.resolve(name)
    }

    /// Whether `a` and `b` resolve to the same canonical name
    pub fn alias_equals(&self, a: &str, b: &str) -> Result<bool, DependError> {
        self.aliases.equals(a, b)
    }

    /// Declare that `depender` depends on one or more dependees.
    ///
    /// Every name is alias-resolved first; missing nodes are created.
    pub fn add_dependency(
        &mut self,
        depender: &str,
        dependees: impl Into<Dependees>,
    ) -> Result<(), DependError> {
        let dependees = dependees.into();
        ensure_plain_name(depender, "depender")?;
        for dependee in dependees.as_slice() {
            ensure_plain_name(dependee, "dependee")?;
        }

        let depender = self.aliases.resolve(depender)?;
        let resolved = dependees
            .as_slice()
            .iter()
            .map(|name| self.aliases.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;

        self.graph.add_node(&depender);
        for dependee in &resolved {
            self.graph.add_node(dependee);
            self.graph.add_dependency(&depender, dependee)?;
        }

        debug!(
            depender = depender.as_str(),
            dependees = %dependees,
            "Registered dependency"
        );
        Ok(())
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Direct access for callers that need node-level mutation
    pub fn graph_mut(&mut self) -> &mut DependencyGraph {
        &mut self.graph
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}

#[cfg(test)]
mod tests {
    include!("registry.test.rs");
}
