use crate::cli::{Cli, Transport};
use anyhow::{Context, Result};
use obsidian_remote_client::VaultConfig;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

/// Validated runtime settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub transport: Transport,
    pub bind_addr: SocketAddr,
    pub vault: VaultConfig,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = cli.api_key.trim();
        if api_key.is_empty() {
            anyhow::bail!("OBSIDIAN_API_KEY must not be empty");
        }

        let bind_addr = (cli.host.as_str(), cli.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address {}:{}", cli.host, cli.port))?
            .next()
            .with_context(|| format!("No address resolved for {}:{}", cli.host, cli.port))?;

        let mut vault = VaultConfig::new(api_key);
        vault.protocol = cli.obsidian_protocol;
        vault.host = cli.obsidian_host.clone();
        vault.port = cli.obsidian_port;
        vault.verify_ssl = cli.verify_ssl;
        vault.timeout = (cli.timeout_secs > 0).then_some(Duration::from_secs(cli.timeout_secs));

        Ok(Self {
            transport: cli.transport,
            bind_addr,
            vault,
        })
    }
}
