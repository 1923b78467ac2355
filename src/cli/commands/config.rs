use anyhow::Result;
use clap::Subcommand;

use crate::config::FtreeConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show,
    /// Show one section of the merged configuration
    Get {
        /// Section path, e.g. `tree`
        section: String,
    },
}

pub fn execute(cmd: ConfigCommands, config: &FtreeConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let full = config.get_full_config()?;
            println!("{}", serde_json::to_string_pretty(&full)?);
        }
        ConfigCommands::Get { section } => {
            let value = config.get_section(&section)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
