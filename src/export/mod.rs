//! Tree serialization for sharing outside the tool.
//!
//! Three formats: `json` for machine consumers, `markdown` for docs and PR
//! descriptions, `ascii` for terminals and plain-text pastes.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::shared::{format_timestamp, human_size};
use crate::tree::TreeNode;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Json,
    Markdown,
    #[default]
    Ascii,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "ascii" | "text" | "txt" => Ok(Self::Ascii),
            other => Err(anyhow!("unknown export format '{other}' (expected json, markdown, or ascii)")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

/// Render a built tree in the requested format. `root_label` heads the
/// markdown and ascii outputs; JSON carries the nodes only.
pub fn render(nodes: &[TreeNode], root_label: &str, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(nodes)?),
        ExportFormat::Markdown => Ok(render_markdown(nodes, root_label)),
        ExportFormat::Ascii => Ok(render_ascii(nodes, root_label)),
    }
}

fn render_markdown(nodes: &[TreeNode], root_label: &str) -> String {
    let mut out = format!("# {root_label}\n\n");
    markdown_level(nodes, 0, &mut out);
    out
}

fn markdown_level(nodes: &[TreeNode], indent: usize, out: &mut String) {
    for node in nodes {
        for _ in 0..indent {
            out.push_str("  ");
        }
        if node.is_dir() {
            out.push_str(&format!("- **{}/**\n", node.name));
            if let Some(children) = &node.children {
                markdown_level(children, indent + 1, out);
            }
        } else {
            out.push_str(&format!("- {}{}\n", node.name, detail_suffix(node)));
        }
    }
}

fn render_ascii(nodes: &[TreeNode], root_label: &str) -> String {
    let mut out = format!("{root_label}\n");
    ascii_level(nodes, "", &mut out);
    out
}

fn ascii_level(nodes: &[TreeNode], prefix: &str, out: &mut String) {
    for (index, node) in nodes.iter().enumerate() {
        let last = index + 1 == nodes.len();
        let connector = if last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&node.name);
        if !node.is_dir() {
            out.push_str(&detail_suffix(node));
        }
        out.push('\n');
        if let Some(children) = &node.children {
            let extension = if last { "    " } else { "│   " };
            ascii_level(children, &format!("{prefix}{extension}"), out);
        }
    }
}

fn detail_suffix(node: &TreeNode) -> String {
    let mut parts = Vec::new();
    if let Some(size) = node.size {
        parts.push(human_size(size));
    }
    if let Some(modified) = &node.modified {
        parts.push(format_timestamp(modified));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}
