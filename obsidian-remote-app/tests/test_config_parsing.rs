#[cfg(test)]
mod config_parsing_tests {
    use clap::Parser;
    use obsidian_remote_app::*;
    use obsidian_remote_client::Protocol;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["mcp-obsidian-remote"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--api-key", "secret"]);
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.bind_addr.port(), 3031);
        assert_eq!(config.vault.base_url(), "https://127.0.0.1:27124");
        assert!(!config.vault.verify_ssl);
        assert_eq!(config.vault.timeout, Some(Duration::from_secs(30)));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_sse_transport_and_bind_address() {
        let cli = parse(&[
            "--api-key",
            "secret",
            "--transport",
            "sse",
            "--host",
            "127.0.0.1",
            "--port",
            "4040",
        ]);
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.transport, Transport::Sse);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:4040");
    }

    #[test]
    fn test_vault_overrides() {
        let cli = parse(&[
            "--api-key",
            "secret",
            "--obsidian-protocol",
            "HTTP",
            "--obsidian-host",
            "vault.local",
            "--obsidian-port",
            "8080",
            "--verify-ssl",
            "yes",
            "--timeout-secs",
            "0",
        ]);
        assert_eq!(cli.obsidian_protocol, Protocol::Http);

        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.vault.base_url(), "http://vault.local:8080");
        assert!(config.vault.verify_ssl);
        assert_eq!(config.vault.timeout, None);
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let result = Cli::try_parse_from([
            "mcp-obsidian-remote",
            "--api-key",
            "secret",
            "--transport",
            "websocket",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_protocol_rejected() {
        let result = Cli::try_parse_from([
            "mcp-obsidian-remote",
            "--api-key",
            "secret",
            "--obsidian-protocol",
            "ftp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let cli = parse(&["--api-key", "   "]);
        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("OBSIDIAN_API_KEY"));
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let cli = parse(&["--api-key", "super-secret-key"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }

    #[test]
    fn test_build_server_registers_all_tools() {
        let cli = parse(&["--api-key", "secret"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        let server = build_server(&config).unwrap();

        assert_eq!(server.dispatcher().registry().count(), 12);
    }
}
