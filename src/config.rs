//! Application configuration.
//!
//! Loaded from `config.yaml` plus environment variables with the
//! `SHOPMESH` prefix. Defaults match the conventional local topology:
//! backends on 5001/5002/5003, gateway on 3000.

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "SHOPMESH_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "SHOPMESH";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "SHOPMESH_LOG";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend server bind configuration.
    pub server: ServerConfig,
    /// Gateway bind and upstream configuration.
    pub gateway: GatewayConfig,
}

/// Backend server configuration.
///
/// All three backends share the bind host; each has its own port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port for the user service.
    pub users_port: u16,
    /// Port for the product service.
    pub products_port: u16,
    /// Port for the order service.
    pub orders_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            users_port: 5001,
            products_port: 5002,
            orders_port: 5003,
        }
    }
}

impl ServerConfig {
    /// Bind address for the user service.
    pub fn users_addr(&self) -> String {
        format!("{}:{}", self.host, self.users_port)
    }

    /// Bind address for the product service.
    pub fn products_addr(&self) -> String {
        format!("{}:{}", self.host, self.products_port)
    }

    /// Bind address for the order service.
    pub fn orders_addr(&self) -> String {
        format!("{}:{}", self.host, self.orders_port)
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Host to bind the REST listener to.
    pub host: String,
    /// Port for the REST listener.
    pub port: u16,
    /// Upstream backend addresses, one per domain.
    pub upstreams: UpstreamConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upstreams: UpstreamConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Bind address for the REST listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream backend addresses (host:port, one per domain).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// User service address.
    pub users: String,
    /// Product service address.
    pub products: String,
    /// Order service address.
    pub orders: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            users: "localhost:5001".to_string(),
            products: "localhost:5002".to_string(),
            orders: "localhost:5003".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `SHOPMESH_CONFIG` environment variable (if set)
    /// 4. Environment variables with `SHOPMESH` prefix
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.users_port, 5001);
        assert_eq!(config.server.products_port, 5002);
        assert_eq!(config.server.orders_port, 5003);
        assert_eq!(config.gateway.port, 3000);
        assert_eq!(config.gateway.upstreams.users, "localhost:5001");
    }

    #[test]
    fn test_addrs() {
        let config = Config::default();
        assert_eq!(config.server.users_addr(), "0.0.0.0:5001");
        assert_eq!(config.server.orders_addr(), "0.0.0.0:5003");
        assert_eq!(config.gateway.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
server:
  host: 127.0.0.1
  users_port: 6001

gateway:
  port: 8080
  upstreams:
    users: localhost:6001
    products: localhost:6002
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.users_port, 6001);
        // Unspecified fields fall back to defaults
        assert_eq!(config.server.products_port, 5002);
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.upstreams.users, "localhost:6001");
        assert_eq!(config.gateway.upstreams.orders, "localhost:5003");
    }
}
