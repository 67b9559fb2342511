use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 27124;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(format!("Unsupported protocol: {}", other)),
        }
    }
}

/// Connection settings for the Local REST API plugin.
#[derive(Clone)]
pub struct VaultConfig {
    pub api_key: String,
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    /// The plugin ships a self-signed certificate, so verification is off unless asked for.
    pub verify_ssl: bool,
    pub timeout: Option<Duration>,
}

impl VaultConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            protocol: Protocol::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verify_ssl: false,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol.as_str(), self.host, self.port)
    }
}

impl fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultConfig")
            .field("api_key", &"<redacted>")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout", &self.timeout)
            .finish()
    }
}
