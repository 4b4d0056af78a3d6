//! Dependency graph with transitive closure queries and cycle detection
//!
//! Nodes are plain names. Each edge `depender -> dependee` is a single
//! petgraph edge record, so it is visible both as an outgoing edge of the
//! depender and as an incoming edge of the dependee; the two views cannot
//! drift apart under mutation.

use super::traversal::{Accumulator, Store, Traversal, neighbors};
use crate::primitives::DependError;
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::stable_graph::NodeIndex;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Directed graph of named resources
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Directed graph: nodes = names, edges = depender -> dependee
    graph: Store,
    /// Map from name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
    /// Live nodes in insertion order (petgraph reuses freed slots)
    insertion: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node (idempotent - won't duplicate if already exists)
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            trace!("Node already exists: {}", name);
            return idx;
        }

        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        self.insertion.push(idx);
        idx
    }

    /// Remove a node and every edge touching it. Returns false if it was absent.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let Some(idx) = self.node_map.remove(name) else {
            return false;
        };

        self.graph.remove_node(idx);
        self.insertion.retain(|&n| n != idx);
        debug!("Removed node: {}", name);
        true
    }

    /// Check if a node exists in the graph
    pub fn has_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Add the edge `from -> to` ("from depends on to"). Both nodes must exist.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> Result<(), DependError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            trace!("Edge already exists: {} -> {}", from, to);
            return Ok(());
        }

        self.graph.add_edge(from_idx, to_idx, ());
        trace!("Added edge: {} -> {}", from, to);
        Ok(())
    }

    /// Remove the edge `from -> to` if present; absent nodes are tolerated
    pub fn remove_dependency(&mut self, from: &str, to: &str) {
        let (Some(&from_idx), Some(&to_idx)) = (self.node_map.get(from), self.node_map.get(to))
        else {
            return;
        };

        if let Some(edge) = self.graph.find_edge(from_idx, to_idx) {
            self.graph.remove_edge(edge);
            trace!("Removed edge: {} -> {}", from, to);
        }
    }

    /// Everything `name` depends on, transitively, dependencies first.
    ///
    /// With `leaves_only`, only nodes that depend on nothing are returned.
    pub fn dependencies_of(&self, name: &str, leaves_only: bool) -> Result<Vec<String>, DependError> {
        self.closure(name, Direction::Outgoing, leaves_only)
    }

    /// Everything that depends on `name`, transitively.
    ///
    /// With `leaves_only`, only nodes that nothing depends on are returned.
    pub fn dependants_of(&self, name: &str, leaves_only: bool) -> Result<Vec<String>, DependError> {
        self.closure(name, Direction::Incoming, leaves_only)
    }

    /// Processing order for the whole graph: every node after its dependencies
    pub fn overall_order(&self, leaves_only: bool) -> Result<Vec<String>, DependError> {
        if self.insertion.is_empty() {
            return Ok(Vec::new());
        }

        let traversal = Traversal::new(&self.graph, Direction::Outgoing, leaves_only);
        let mut acc = Accumulator::new();

        let roots: Vec<NodeIndex> = self
            .insertion
            .iter()
            .copied()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();
        debug!(
            nodes = self.insertion.len(),
            roots = roots.len(),
            "Computing overall order"
        );

        for root in roots {
            traversal.run(root, &mut acc)?;
        }

        // Nothing reachable from a root: the whole graph is cyclic, so walk
        // from the first node to report the cycle
        if acc.is_empty() {
            traversal.run(self.insertion[0], &mut acc)?;
        }

        Ok(self.names(acc.into_order()))
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Path of the first cycle found walking nodes in insertion order.
    ///
    /// Unlike `overall_order`, this also finds cycles that no root reaches.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let traversal = Traversal::new(&self.graph, Direction::Outgoing, false);
        let mut acc = Accumulator::new();

        for &idx in &self.insertion {
            if let Err(DependError::CycleDetected { path }) = traversal.run(idx, &mut acc) {
                return Some(path);
            }
        }
        None
    }

    /// Direct dependencies of a node, in declaration order
    pub fn direct_dependencies_of(&self, name: &str) -> Option<Vec<String>> {
        let idx = self.node_map.get(name)?;
        Some(self.names(neighbors(&self.graph, *idx, Direction::Outgoing)))
    }

    /// Direct dependants of a node, in declaration order
    pub fn direct_dependants_of(&self, name: &str) -> Option<Vec<String>> {
        let idx = self.node_map.get(name)?;
        Some(self.names(neighbors(&self.graph, *idx, Direction::Incoming)))
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node names in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.insertion.iter().map(|&idx| self.graph[idx].as_str())
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, DependError> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| DependError::node_not_found(name))
    }

    fn closure(
        &self,
        name: &str,
        direction: Direction,
        leaves_only: bool,
    ) -> Result<Vec<String>, DependError> {
        let start = self.index_of(name)?;
        let mut acc = Accumulator::new();
        Traversal::new(&self.graph, direction, leaves_only).run(start, &mut acc)?;

        let reached: Vec<NodeIndex> = acc
            .into_order()
            .into_iter()
            .filter(|&idx| idx != start)
            .collect();
        debug!(
            node = name,
            direction = ?direction,
            leaves_only,
            count = reached.len(),
            "Resolved transitive closure"
        );
        Ok(self.names(reached))
    }

    fn names(&self, indices: Vec<NodeIndex>) -> Vec<String> {
        indices
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
