//! Small helpers shared across commands.

pub mod format;

pub use format::{format_timestamp, human_size};
