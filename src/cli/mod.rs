//! Command-line interface.
//!
//! Parsing is done with clap; each subcommand lives in its own module under
//! `commands` and receives the merged configuration plus the shared output
//! handler.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

use crate::config::FtreeConfig;

/// ftree - filtered directory trees for exploring and sharing project layout
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the filtered tree for a directory
    Tree(commands::tree::TreeArgs),
    /// Export the tree as json, markdown, or ascii
    Export(commands::export::ExportArgs),
    /// Show aggregate statistics for a directory
    Stats(commands::stats::StatsArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(commands::config::ConfigCommands),
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        commands::setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let config = match self.config.as_deref() {
            Some(path) => FtreeConfig::load_with_custom_config(Some(path))?,
            None => FtreeConfig::load()?,
        };
        let settings = config.settings()?;

        match self.command {
            Some(Commands::Tree(args)) => commands::tree::execute(args, &settings, &output).await,
            Some(Commands::Export(args)) => {
                commands::export::execute(args, &settings, &output).await
            }
            Some(Commands::Stats(args)) => commands::stats::execute(args, &settings, &output).await,
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, &config),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
