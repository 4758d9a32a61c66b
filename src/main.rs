use anyhow::Result;
use clap::Parser;

use ticketsync_cli::config::Config;
use ticketsync_cli::sync;

/// Takes no arguments: every invocation performs one full pass and
/// exits, which keeps the binary safe to run straight from cron.
#[derive(Parser)]
#[command(name = "ticketsync")]
#[command(version)]
#[command(about = "Sync Eventbrite events, venues and ticket sales into an Airtable base")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();

    // Pick up tokens from a local .env file if one is present.
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    sync::run(&config).await
}
