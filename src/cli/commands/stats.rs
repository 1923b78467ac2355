use anyhow::Result;
use clap::Args;

use super::WalkArgs;
use crate::analytics;
use crate::cli::Output;
use crate::config::Settings;
use crate::shared::human_size;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Emit the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: StatsArgs, settings: &Settings, output: &Output) -> Result<()> {
    let (nodes, _) = super::build_tree(&args.walk, settings).await;
    let report = analytics::analyze(&nodes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output.header(&super::root_label(&args.walk.path));
    output.table_row("Directories", &report.total_directories.to_string());
    output.table_row("Files", &report.total_files.to_string());
    output.table_row("Total size", &human_size(report.total_size));

    if !report.file_types.is_empty() {
        output.header("File types");
        let mut types: Vec<_> = report.file_types.iter().collect();
        types.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (ext, count) in types {
            output.table_row(ext, &count.to_string());
        }
    }

    if !report.largest_files.is_empty() {
        output.header("Largest files");
        for file in &report.largest_files {
            output.list_item(&format!("{} ({})", file.path.display(), human_size(file.size)));
        }
    }

    if !report.recently_modified.is_empty() {
        output.header("Recently modified");
        for file in &report.recently_modified {
            output.list_item(&file.path.display().to_string());
        }
    }

    output.blank_line();
    output.success(&report.summary());
    Ok(())
}
