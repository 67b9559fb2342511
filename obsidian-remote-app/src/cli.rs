use clap::{Parser, ValueEnum};
use obsidian_remote_client::config::{DEFAULT_HOST, DEFAULT_PORT};
use obsidian_remote_client::Protocol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Sse,
}

#[derive(Parser, Debug)]
#[command(
    name = "mcp-obsidian-remote",
    version,
    about = "MCP server to work with Obsidian remotely via REST plugin"
)]
pub struct Cli {
    /// Transport to serve on
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the SSE transport
    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "MCP_PORT", default_value_t = 3031)]
    pub port: u16,

    /// Local REST API key
    #[arg(long, env = "OBSIDIAN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "OBSIDIAN_PROTOCOL", default_value = "https")]
    pub obsidian_protocol: Protocol,

    #[arg(long, env = "OBSIDIAN_HOST", default_value = DEFAULT_HOST)]
    pub obsidian_host: String,

    #[arg(long, env = "OBSIDIAN_PORT", default_value_t = DEFAULT_PORT)]
    pub obsidian_port: u16,

    #[arg(
        long,
        env = "OBSIDIAN_VERIFY_SSL",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub verify_ssl: bool,

    /// Per-request timeout towards the vault, 0 disables it
    #[arg(long, env = "OBSIDIAN_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
