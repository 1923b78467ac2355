use anyhow::Result;
use clap::Args;

use super::WalkArgs;
use crate::cli::Output;
use crate::config::Settings;
use crate::export::{self, ExportFormat};

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub walk: WalkArgs,
}

pub async fn execute(args: TreeArgs, settings: &Settings, output: &Output) -> Result<()> {
    let (nodes, stats) = super::build_tree(&args.walk, settings).await;

    if nodes.is_empty() && stats.error_count > 0 {
        output.error(&format!("cannot read {}", args.walk.path.display()));
        anyhow::bail!("tree build failed");
    }

    let rendered = export::render(&nodes, &super::root_label(&args.walk.path), ExportFormat::Ascii)?;
    print!("{rendered}");

    if stats.error_count > 0 {
        output.warning(&format!("{} directories could not be read", stats.error_count));
    }
    output.verbose(&format!(
        "listed {} directories ({} cache hits)",
        stats.directories_listed, stats.cache_hits
    ));
    Ok(())
}
