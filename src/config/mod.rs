//! Layered configuration.
//!
//! Defaults are embedded at build time; user and repository files in TOML,
//! JSON, or YAML override them, and `FTREE_`-prefixed environment variables
//! override everything.

pub mod core;

pub use core::{ExportSettings, FtreeConfig, GeneralSettings, Settings, TreeSettings};
