use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod etl;

#[derive(Debug, Parser)]
#[command(name = "venuemap")]
#[command(about = "Venue discovery ETL for the venuemap front end")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one full scrape → geocode → export pass
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = venuemap_core::load_app_config().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        // `venuemap` with no subcommand runs the pipeline; there is only
        // one thing this binary does.
        Some(Commands::Run) | None => etl::run(&config).await,
    }
}
