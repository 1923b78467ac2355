//! Aggregate statistics over a built tree.
//!
//! A single pass over the node hierarchy produces counts, a per-extension
//! breakdown, and the largest and most recently modified files. Works on
//! whatever the builder produced; unexpanded directories contribute only
//! themselves.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::human_size;
use crate::tree::TreeNode;

const TOP_FILE_COUNT: usize = 10;

/// A file surfaced in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSample {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Rolled-up view of a tree.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TreeAnalytics {
    pub total_files: u64,
    pub total_directories: u64,
    pub total_size: u64,
    /// Lowercased extension (or `no-extension`) to file count. Ordered map
    /// keeps report output stable.
    pub file_types: BTreeMap<String, u64>,
    pub largest_files: Vec<FileSample>,
    pub recently_modified: Vec<FileSample>,
}

impl TreeAnalytics {
    /// One-line human summary, e.g. `12 directories, 87 files, 4.2 MB`.
    pub fn summary(&self) -> String {
        format!(
            "{} directories, {} files, {}",
            self.total_directories,
            self.total_files,
            human_size(self.total_size)
        )
    }
}

/// Reduce a tree into its analytics in one traversal.
pub fn analyze(nodes: &[TreeNode]) -> TreeAnalytics {
    let mut analytics = TreeAnalytics::default();
    let mut files = Vec::new();
    collect(nodes, &mut analytics, &mut files);

    let mut by_size = files.clone();
    by_size.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
    by_size.truncate(TOP_FILE_COUNT);
    analytics.largest_files = by_size;

    files.retain(|f| f.modified.is_some());
    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    files.truncate(TOP_FILE_COUNT);
    analytics.recently_modified = files;

    analytics
}

fn collect(nodes: &[TreeNode], analytics: &mut TreeAnalytics, files: &mut Vec<FileSample>) {
    for node in nodes {
        if node.is_dir() {
            analytics.total_directories += 1;
            if let Some(children) = &node.children {
                collect(children, analytics, files);
            }
            continue;
        }

        analytics.total_files += 1;
        let size = node.size.unwrap_or(0);
        analytics.total_size += size;
        *analytics.file_types.entry(extension_key(&node.name)).or_insert(0) += 1;
        files.push(FileSample {
            name: node.name.clone(),
            path: node.path.clone(),
            size,
            modified: node.modified,
        });
    }
}

fn extension_key(name: &str) -> String {
    match Path::new(name).extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => "no-extension".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use chrono::TimeZone;

    fn dir(name: &str, children: Option<Vec<TreeNode>>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            kind: NodeKind::Directory,
            path: PathBuf::from(name),
            size: None,
            modified: None,
            children,
        }
    }

    fn file(name: &str, size: u64) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            kind: NodeKind::File,
            path: PathBuf::from(name),
            size: Some(size),
            modified: None,
            children: None,
        }
    }

    #[test]
    fn test_counts_and_sizes() {
        let tree = vec![
            dir("src", Some(vec![file("lib.rs", 2000), file("main.rs", 500)])),
            dir("closed", None),
            file("README.md", 100),
        ];
        let analytics = analyze(&tree);
        assert_eq!(analytics.total_directories, 2);
        assert_eq!(analytics.total_files, 3);
        assert_eq!(analytics.total_size, 2600);
        assert_eq!(analytics.summary(), "2 directories, 3 files, 2.5 KB");
    }

    #[test]
    fn test_extension_breakdown_is_case_insensitive() {
        let tree = vec![
            file("a.RS", 1),
            file("b.rs", 1),
            file("notes.TXT", 1),
            file("Makefile", 1),
            file(".gitignore", 1),
        ];
        let analytics = analyze(&tree);
        assert_eq!(analytics.file_types.get("rs"), Some(&2));
        assert_eq!(analytics.file_types.get("txt"), Some(&1));
        assert_eq!(analytics.file_types.get("no-extension"), Some(&2));
    }

    #[test]
    fn test_largest_files_ranked_and_capped() {
        let tree: Vec<TreeNode> = (0..15).map(|i| file(&format!("f{i:02}.bin"), i)).collect();
        let analytics = analyze(&tree);
        assert_eq!(analytics.largest_files.len(), 10);
        assert_eq!(analytics.largest_files[0].name, "f14.bin");
        assert_eq!(analytics.largest_files[0].size, 14);
        assert_eq!(analytics.largest_files[9].size, 5);
    }

    #[test]
    fn test_recently_modified_ignores_undated_files() {
        let mut dated = file("new.rs", 1);
        dated.modified = Some(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap());
        let mut older = file("old.rs", 1);
        older.modified = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        let tree = vec![file("undated.rs", 1), older, dated];

        let analytics = analyze(&tree);
        let names: Vec<&str> =
            analytics.recently_modified.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["new.rs", "old.rs"]);
    }

    #[test]
    fn test_empty_tree() {
        let analytics = analyze(&[]);
        assert_eq!(analytics.summary(), "0 directories, 0 files, 0 B");
        assert!(analytics.file_types.is_empty());
        assert!(analytics.largest_files.is_empty());
    }
}
