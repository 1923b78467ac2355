//! Ignore-source reader.
//!
//! Reads the `.gitignore` at a project root into raw pattern lines. Lines are
//! preserved verbatim (including `!` negation markers and trailing `/`
//! directory markers); classification into rule kinds happens in
//! [`crate::filter::rule`], not here.

use std::path::Path;

use crate::fs::FileSystem;

/// File name of the ignore convention honored at each root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Parse ignore-file content into raw pattern lines.
///
/// Lines are trimmed; blanks and `#` comments are dropped. Linear in input
/// size, no line-count ceiling.
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse the ignore file at `root`. A missing or unreadable file
/// yields no patterns; no error reaches the caller.
pub async fn read<F: FileSystem>(fs: &F, root: &Path) -> Vec<String> {
    let path = root.join(IGNORE_FILE);
    match fs.read_file(&path).await {
        Ok(bytes) => parse(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            tracing::debug!("no ignore file at {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# build artifacts\n\nnode_modules/\n   \n*.log\n  # inline note\nsecret.key\n";
        let lines = parse(content);
        assert_eq!(lines, vec!["node_modules/", "*.log", "secret.key"]);
    }

    #[test]
    fn test_parse_preserves_markers_verbatim() {
        let lines = parse("!important.log\ntemp-folder/\n");
        assert_eq!(lines, vec!["!important.log", "temp-folder/"]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let lines = parse("  dist/  \n\t*.tmp\t\n");
        assert_eq!(lines, vec!["dist/", "*.tmp"]);
    }

    #[test]
    fn test_parse_large_input_preserves_order_and_count() {
        let mut content = String::new();
        for i in 0..2000 {
            content.push_str(&format!("pattern-{i}\n"));
        }
        let lines = parse(&content);
        assert_eq!(lines.len(), 2000);
        assert_eq!(lines[0], "pattern-0");
        assert_eq!(lines[1999], "pattern-1999");
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n# only comments\n").is_empty());
    }
}
