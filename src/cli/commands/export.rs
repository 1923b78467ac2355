use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::WalkArgs;
use crate::cli::Output;
use crate::config::Settings;
use crate::export::{self, ExportFormat};

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Output format: json, markdown, or ascii (defaults to the configured one)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: ExportArgs, settings: &Settings, output: &Output) -> Result<()> {
    let format: ExportFormat = args
        .format
        .as_deref()
        .unwrap_or(&settings.export.format)
        .parse()?;

    let (nodes, stats) = super::build_tree(&args.walk, settings).await;
    let rendered = export::render(&nodes, &super::root_label(&args.walk.path), format)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("cannot write {}", path.display()))?;
            output.success(&format!("exported {format} tree to {}", path.display()));
        }
        None => print!("{rendered}"),
    }

    if stats.error_count > 0 {
        output.warning(&format!("{} directories could not be read", stats.error_count));
    }
    Ok(())
}
