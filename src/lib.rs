//! # ftree - Filtered Directory Trees
//!
//! Builds a filtered, depth-bounded view of a directory hierarchy and renders
//! it for terminals, docs, and machine consumers.
//!
//! ## Features
//!
//! - **Layered exclusions**: Built-in defaults, configured patterns, and the
//!   project's `.gitignore` merge into one policy with negation support
//! - **Concurrent walking**: Sibling directories are listed in parallel with
//!   a bounded number of in-flight reads
//! - **Cached**: Listings are cached per path and depth, so repeated builds
//!   over an unchanged view cost nothing
//! - **Resilient**: Unreadable directories degrade to empty results instead
//!   of aborting the walk
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the filtered tree for the current directory
//! ftree tree
//!
//! # Export it as markdown
//! ftree export --format markdown --output TREE.md
//!
//! # Aggregate statistics
//! ftree stats
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod export;
pub mod filter;
pub mod fs;
pub mod shared;
pub mod tree;

pub use cli::{Cli, Output};
pub use config::FtreeConfig;

/// Result type alias for ftree operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
