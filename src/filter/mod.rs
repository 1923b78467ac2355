//! Exclusion engine: pattern compilation, ignore-source reading, and the
//! layered policy deciding which entries are visible.

pub mod defaults;
pub mod gitignore;
pub mod policy;
pub mod rule;

pub use defaults::DEFAULT_EXCLUDES;
pub use policy::ExclusionPolicy;
pub use rule::{Rule, RuleKind, RuleSource};
