//! One-way alias table
//!
//! Aliases redirect a symbolic name to another name. Chains collapse to the
//! final target; a chain that loops back on itself is reported as a cycle.

use crate::primitives::{DependError, ensure_plain_name};
use std::collections::{HashMap, HashSet};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `from -> to`, replacing any previous target of `from`.
    /// Blank names are rejected with `InvalidArgument`.
    pub fn add(&mut self, from: &str, to: &str) -> Result<(), DependError> {
        ensure_plain_name(from, "alias source")?;
        ensure_plain_name(to, "alias target")?;

        if let Some(previous) = self.aliases.insert(from.to_string(), to.to_string()) {
            trace!("Alias {} retargeted from {} to {}", from, previous, to);
        } else {
            trace!("Alias added: {} -> {}", from, to);
        }
        Ok(())
    }

    pub fn remove(&mut self, from: &str) -> Option<String> {
        self.aliases.remove(from)
    }

    /// Direct target of `from`, without following the chain
    pub fn target(&self, from: &str) -> Option<&str> {
        self.aliases.get(from).map(String::as_str)
    }

    /// Follow the alias chain from `name` to its canonical name.
    ///
    /// Names without an alias resolve to themselves. Resolution only moves
    /// forward: a target never resolves back to its source.
    pub fn resolve(&self, name: &str) -> Result<String, DependError> {
        let mut current = name;
        let mut chain: Vec<&str> = vec![name];
        let mut seen: HashSet<&str> = HashSet::from([name]);

        while let Some(next) = self.aliases.get(current) {
            if !seen.insert(next.as_str()) {
                let start = chain.iter().position(|n| *n == next.as_str()).unwrap_or(0);
                let mut path: Vec<String> = chain[start..].iter().map(|n| n.to_string()).collect();
                path.push(next.clone());
                return Err(DependError::CycleDetected { path });
            }
            chain.push(next.as_str());
            current = next.as_str();
        }

        Ok(current.to_string())
    }

    /// Whether two names resolve to the same canonical name
    pub fn equals(&self, a: &str, b: &str) -> Result<bool, DependError> {
        Ok(self.resolve(a)? == self.resolve(b)?)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    include!("alias.test.rs");
}
