use anyhow::Result;
use clap::Parser;

use ftree::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}
