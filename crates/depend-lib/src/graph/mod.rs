//! # Graph Module
//!
//! Graph store and traversal engine behind every dependency query.
//!
//! ## Modules
//!
//! - [`dependency_graph`] - Node/edge storage, transitive closure and overall ordering
//! - `traversal` - Explicit-stack depth-first search with cycle detection

pub mod dependency_graph;
pub(crate) mod traversal;

pub use dependency_graph::DependencyGraph;
