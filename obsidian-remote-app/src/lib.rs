pub mod cli;
pub mod config;

use anyhow::{Context, Result};
use obsidian_remote_client::{RestVaultClient, VaultClient};
use obsidian_remote_server::McpServer;
use obsidian_remote_tools::{default_registry, Dispatcher};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Transport};
pub use config::AppConfig;

/// Logs go to stderr; stdout belongs to the stdio transport.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Builds the client, registry and dispatcher. Any error here is fatal.
pub fn build_server(config: &AppConfig) -> Result<McpServer> {
    let client: Arc<dyn VaultClient> =
        Arc::new(RestVaultClient::new(&config.vault).context("Failed to build vault client")?);
    let registry = default_registry(client).context("Failed to register tools")?;
    info!(
        "Registered {} tools against {}",
        registry.count(),
        config.vault.base_url()
    );
    Ok(McpServer::new(Dispatcher::new(Arc::new(registry))))
}

pub async fn run(config: AppConfig) -> Result<()> {
    let server = build_server(&config)?;
    match config.transport {
        Transport::Stdio => server.run_stdio().await?,
        Transport::Sse => server.run_sse(config.bind_addr).await?,
    }
    Ok(())
}
