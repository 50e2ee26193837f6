use anyhow::{Context, Result};
use clap::Parser;
use wayback_title_scraper::config::{DEFAULT_ARCHIVE_BASE, DEFAULT_INPUT, DEFAULT_OUTPUT};
use wayback_title_scraper::{run_batch, ReqwestTransport, RunConfig};

/// Record the title and first heading of the latest archived snapshot of each URL
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one URL per line
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Semicolon-separated output file, overwritten on every run
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Archive to query
    #[arg(long, default_value = DEFAULT_ARCHIVE_BASE)]
    archive_base: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let config = RunConfig::new(&cli.input, &cli.output, &cli.archive_base);
    let transport = ReqwestTransport::new();

    let summary = run_batch(&transport, &config).context("Batch run failed")?;

    log::info!(
        "{} URLs: {} ok, {} without snapshot, {} HTTP errors, {} failed",
        summary.total,
        summary.succeeded,
        summary.no_snapshot,
        summary.http_errors,
        summary.failed
    );

    Ok(())
}
