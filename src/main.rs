use anyhow::Result;
use clap::Parser;

use qrglass_cli::settings::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    let cli = qrglass_cli::cli::Cli::parse();
    qrglass_cli::run(cli).await?;
    Ok(())
}
