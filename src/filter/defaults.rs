/// Built-in exclusion patterns applied before user and ignore-source rules.
///
/// Kept as an explicit constant table that callers pass into
/// [`crate::filter::ExclusionPolicy::new`] rather than a hidden singleton, so
/// tests can substitute their own set. Names without wildcards match exactly
/// (case-insensitive, whole name only); `*` entries compile to globs.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Version control metadata
    ".git",
    ".svn",
    ".hg",
    // Dependency trees
    "node_modules",
    "vendor",
    // Build output
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    // Virtual environments
    ".venv",
    "venv",
    "env",
    ".env",
    // IDE state
    ".vs",
    ".idea",
    // OS cruft
    ".DS_Store",
    "Thumbs.db",
    // Bytecode and transient files
    "__pycache__",
    "*.pyc",
    "*.log",
    "*.tmp",
    "*.cache",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_common_directories() {
        for name in ["node_modules", "target", ".git", "dist", "__pycache__"] {
            assert!(DEFAULT_EXCLUDES.contains(&name), "missing default: {name}");
        }
    }

    #[test]
    fn test_defaults_have_no_blank_entries() {
        assert!(DEFAULT_EXCLUDES.iter().all(|p| !p.trim().is_empty()));
    }
}
