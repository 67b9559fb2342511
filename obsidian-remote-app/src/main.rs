use anyhow::Result;
use clap::Parser;
use obsidian_remote_app::{init_tracing, run, AppConfig, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = AppConfig::from_cli(&cli)?;
    info!(transport = ?config.transport, "starting mcp-obsidian-remote");
    run(config).await
}
