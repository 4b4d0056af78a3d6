//! Depth-first traversal shared by every graph query
//!
//! A single primitive walks either edge direction with an explicit frame
//! stack, detects cycles by membership in the active path, and emits nodes
//! in post-order so that every node follows the nodes it leads to.

use crate::primitives::DependError;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashSet;
use tracing::trace;

/// Backing storage: node weight is the name, edges carry no payload
pub(crate) type Store = StableDiGraph<String, ()>;

/// Neighbours in the followed direction, in edge insertion order
pub(crate) fn neighbors(graph: &Store, node: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
    // petgraph links the newest edge at the head of each list
    let mut found: Vec<NodeIndex> = graph.neighbors_directed(node, direction).collect();
    found.reverse();
    found
}

/// Ordered output plus the visited set, shareable across several runs
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    order: Vec<NodeIndex>,
    emitted: HashSet<NodeIndex>,
    visited: HashSet<NodeIndex>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.contains(&node)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<NodeIndex> {
        self.order
    }

    fn emit(&mut self, node: NodeIndex) {
        if self.emitted.insert(node) {
            self.order.push(node);
        }
    }
}

struct Frame {
    node: NodeIndex,
    neighbors: Vec<NodeIndex>,
    cursor: usize,
}

/// DFS configuration: which edges to follow and whether to keep only leaves
pub(crate) struct Traversal<'g> {
    graph: &'g Store,
    direction: Direction,
    leaves_only: bool,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g Store, direction: Direction, leaves_only: bool) -> Self {
        Self {
            graph,
            direction,
            leaves_only,
        }
    }

    /// Walk everything reachable from `start`, appending to `acc`.
    ///
    /// A start node already visited through `acc` is skipped. Fails with
    /// `CycleDetected` as soon as a node on the active path is reached again.
    pub fn run(&self, start: NodeIndex, acc: &mut Accumulator) -> Result<(), DependError> {
        if acc.is_visited(start) {
            return Ok(());
        }

        let mut path: Vec<NodeIndex> = Vec::new();
        let mut on_path: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();

        self.enter(start, acc, &mut path, &mut on_path, &mut stack);

        while let Some(frame) = stack.last_mut() {
            match frame.neighbors.get(frame.cursor).copied() {
                Some(next) => {
                    frame.cursor += 1;
                    if !acc.is_visited(next) {
                        self.enter(next, acc, &mut path, &mut on_path, &mut stack);
                    } else if on_path.contains(&next) {
                        return Err(self.cycle_error(&path, next));
                    }
                }
                None => {
                    let node = frame.node;
                    let is_leaf = frame.neighbors.is_empty();
                    stack.pop();
                    path.pop();
                    on_path.remove(&node);

                    if !self.leaves_only || is_leaf {
                        acc.emit(node);
                    }
                }
            }
        }

        Ok(())
    }

    fn enter(
        &self,
        node: NodeIndex,
        acc: &mut Accumulator,
        path: &mut Vec<NodeIndex>,
        on_path: &mut HashSet<NodeIndex>,
        stack: &mut Vec<Frame>,
    ) {
        let name: &str = &self.graph[node];
        trace!(node = name, depth = path.len(), "Visiting node");
        acc.visited.insert(node);
        path.push(node);
        on_path.insert(node);
        stack.push(Frame {
            node,
            neighbors: neighbors(self.graph, node, self.direction),
            cursor: 0,
        });
    }

    /// Path from the re-entered node to the current one, closed by the re-entered node
    fn cycle_error(&self, path: &[NodeIndex], reentered: NodeIndex) -> DependError {
        let start = path.iter().position(|&n| n == reentered).unwrap_or(0);
        let cycle: Vec<String> = path[start..]
            .iter()
            .chain(std::iter::once(&reentered))
            .map(|&idx| self.graph[idx].clone())
            .collect();
        DependError::CycleDetected { path: cycle }
    }
}

#[cfg(test)]
mod tests {
    include!("traversal.test.rs");
}
