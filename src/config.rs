// Configuration module
// Layered startup configuration and the immutable per-process state.

use serde::Deserialize;
use std::net::SocketAddr;

use crate::facts::FactClient;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub facts: FactsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Facts service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FactsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the optional `config.toml`, `SERVER_*`
    /// environment overrides, and built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("facts.base_url", "http://numbersapi.com")?
            .set_default("facts.timeout_secs", 5)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // NUMBERS_API_URL takes precedence over any file- or env-provided
        // facts URL, matching the public deployment contract.
        if let Ok(url) = std::env::var("NUMBERS_API_URL") {
            cfg.facts.base_url = url;
        }

        Ok(cfg)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state. Built once at startup and never mutated;
/// request handlers only read from it.
pub struct AppState {
    pub config: Config,
    pub facts: FactClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            facts: FactClient::new(&config.facts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let cfg = Config::load().expect("defaults should deserialize");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.facts.timeout_secs, 5);
        assert!(cfg.facts.base_url.starts_with("http"));
    }
}
