use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One file or directory entry in the filtered hierarchy.
///
/// `children` is `None` for a directory that was not expanded (depth limit
/// reached) and `Some(vec![])` for one that was expanded and turned out
/// empty. A parent exclusively owns its children; the tree has no cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Counters collected during traversal, surfaced for diagnostics only.
/// Failures never abort a build; they show up here and in the logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub directories_listed: u64,
    pub error_count: u64,
    pub cache_hits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_omits_absent_fields() {
        let node = TreeNode {
            name: "src".to_string(),
            kind: NodeKind::Directory,
            path: PathBuf::from("/project/src"),
            size: None,
            modified: None,
            children: None,
        };
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"directory\""));
        assert!(!json.contains("size"));
        assert!(!json.contains("children"));
    }

    #[test]
    fn test_serialization_keeps_empty_children() {
        let node = TreeNode {
            name: "empty".to_string(),
            kind: NodeKind::Directory,
            path: PathBuf::from("/project/empty"),
            size: None,
            modified: None,
            children: Some(Vec::new()),
        };
        let json = serde_json::to_string(&node).unwrap();
        // Expanded-but-empty must be distinguishable from not-expanded.
        assert!(json.contains("\"children\":[]"));
    }
}
