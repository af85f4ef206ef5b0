mod database;
mod server;

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

use crate::error::{Error, Result};

/// Process configuration, optionally read from a TOML file with `[server]`
/// and `[database]` tables. Missing keys fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        if config.database.pool_size == 0 {
            return Err(Error::Config("database.pool_size must be at least 1".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.allowed_origin, "http://localhost:3000");
        assert_eq!(config.database.pool_size, 5);
    }

    #[test]
    fn test_partial_tables_merge_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8081

            [database]
            path = "/var/lib/gsos/clients.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.database.path,
            std::path::PathBuf::from("/var/lib/gsos/clients.db")
        );
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert_eq!(config.database.connection_timeout_ms, 30_000);
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let result = Config::from_toml_str("[database]\npool_size = 0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Config::load(temp.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            ..ServerConfig::default()
        };
        assert_eq!(server.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_socket_addr_accepts_ipv6_host() {
        let server = ServerConfig {
            host: "::".to_string(),
            port: 5000,
            ..ServerConfig::default()
        };
        let addr = server.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::]:5000");
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(server.socket_addr().is_err());
    }
}
