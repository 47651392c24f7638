//! CLI argument parsing and command handling

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::RunConfig;
use crate::output::JsonExporter;
use crate::report::RunReport;
use crate::runner::Runner;

/// translate-bench - bulk load harness for translation endpoints
#[derive(Parser, Debug)]
#[command(name = "translate-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target endpoint URL
    #[arg(short, long)]
    pub url: String,

    /// Text sent in every request payload
    #[arg(long, default_value = "Hello, how are you today?")]
    pub text: String,

    /// Target language code sent in every request payload
    #[arg(long, default_value = "wolof")]
    pub to_lang: String,

    /// Bearer token for the Authorization header
    #[arg(
        short = 'k',
        long,
        env = "AUTH_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    pub token: String,

    /// Number of requests per batch (bounds peak concurrency)
    #[arg(short, long, default_value = "50")]
    pub batch_size: usize,

    /// Maximum request initiations per second
    #[arg(short, long, default_value = "10")]
    pub rate_limit: f64,

    /// Total number of requests to send
    #[arg(short = 'n', long, default_value = "100")]
    pub total_requests: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Output directory for persisted result files
    #[arg(short, long, default_value = "results")]
    pub output_dir: String,

    /// Disable the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Run the load harness based on CLI arguments
    pub async fn run(&self) -> Result<()> {
        tracing::info!("Starting translate-bench");

        println!("\n{}", "=".repeat(70));
        println!("   translate-bench - Bulk Translation Load Harness");
        println!("{}", "=".repeat(70));
        println!();
        println!("Configuration:");
        println!("  URL:            {}", self.url);
        println!("  Total requests: {}", self.total_requests);
        println!("  Batch size:     {}", self.batch_size);
        println!("  Rate limit:     {} req/s", self.rate_limit);
        println!("{}", "=".repeat(70));
        println!();

        let config = RunConfig::new(&self.url)
            .with_payload(&self.text, &self.to_lang)
            .with_token(&self.token)
            .with_batch_size(self.batch_size)
            .with_rate_limit(self.rate_limit)
            .with_total_requests(self.total_requests)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        let runner = Runner::new(config)
            .context("failed to initialize runner")?
            .with_progress(!self.quiet);

        let report = runner.run().await?;

        self.print_summary(&report);

        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory: {}", self.output_dir))?;

        let written = JsonExporter::export(&report, Path::new(&self.output_dir))
            .context("Failed to export results")?;
        for path in written {
            println!("✓ Results written to: {}", path.display());
        }

        Ok(())
    }

    /// Print the run summary
    fn print_summary(&self, report: &RunReport) {
        println!("\nSummary:");
        println!(
            "  Total time:          {:.2} seconds",
            report.total_elapsed.as_secs_f64()
        );
        println!("  Successful requests: {}", report.successes.len());
        println!("  Failed requests:     {}", report.failures.len());
        println!();
    }
}
