use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::filter::{DEFAULT_EXCLUDES, ExclusionPolicy};
use crate::fs::LocalFileSystem;
use crate::tree::{TreeBuilder, TreeNode, TreeStats};

pub mod config;
pub mod export;
pub mod stats;
pub mod tree;

/// Walk arguments shared by the tree, export, and stats commands.
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Directory to walk
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to expand
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Additional exclusion patterns (repeatable, supports * and ?)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Ignore the .gitignore at the root
    #[arg(long)]
    pub no_gitignore: bool,

    /// Include file modification dates
    #[arg(long)]
    pub dates: bool,
}

/// Build the filtered tree for a walk invocation, merging configured
/// settings with command-line overrides.
pub(crate) async fn build_tree(args: &WalkArgs, settings: &Settings) -> (Vec<TreeNode>, TreeStats) {
    let fs = LocalFileSystem;

    let mut user_patterns = settings.tree.exclude.clone();
    user_patterns.extend(args.exclude.iter().cloned());

    let policy = if settings.tree.respect_gitignore && !args.no_gitignore {
        ExclusionPolicy::for_root(&fs, &args.path, DEFAULT_EXCLUDES, &user_patterns).await
    } else {
        ExclusionPolicy::new(DEFAULT_EXCLUDES, &user_patterns)
    };

    let mut options = settings.tree.to_options();
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    if args.dates {
        options.show_file_date = true;
    }

    let builder = TreeBuilder::new(fs, policy, options);
    let nodes = builder.build(&args.path).await;
    (nodes, builder.stats())
}

/// Label used as the root line of rendered trees.
pub(crate) fn root_label(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
