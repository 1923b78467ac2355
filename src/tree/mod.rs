//! Filtered hierarchical tree model and the async builder that produces it.

pub mod builder;
pub mod types;

pub use builder::{TreeBuilder, TreeOptions};
pub use types::{NodeKind, TreeNode, TreeStats};
