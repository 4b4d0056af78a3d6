pub mod alias;
pub mod manifest;
pub mod query;
pub mod registry;
pub mod render;
pub mod sets;

// Re-export main types for convenience
pub use alias::AliasTable;
pub use manifest::{DependConfig, ManifestError};
pub use query::{JS_SUFFIX, QueryOptions};
pub use registry::DependencyRegistry;
pub use render::{render_as_script_tags, render_script_tag};

// Re-export primitives types for convenience
pub use crate::primitives::{DependError, Dependees};
