//! translate-bench CLI
//!
//! Command-line entry point for running bulk translation load tests.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use translate_bench::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
