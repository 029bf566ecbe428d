//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default        |
//! |-------------------------|----------------|
//! | `HOST`                  | `0.0.0.0`      |
//! | `PORT`                  | `3000`         |
//! | `DB_NAME`               | `stockroom`    |
//! | `DATABASE_PATH`         | `<DB_NAME>.db` |
//! | `DB_MAX_CONNECTIONS`    | `5`            |
//! | `EXPOSE_STORAGE_ERRORS` | `false`        |
//! | `RUST_LOG`              | `info`         |

use std::env;
use std::path::PathBuf;

use stockroom_db::DbConfig;

const DEFAULT_DB_NAME: &str = "stockroom";

/// API server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Interface to bind.
    pub host: String,

    /// HTTP port.
    pub port: u16,

    /// SQLite database file.
    pub database_path: PathBuf,

    /// Upper bound for the connection pool.
    pub db_max_connections: u32,

    /// Include storage failure causes in 500 responses.
    pub expose_storage_errors: bool,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_path: PathBuf::from(format!("{DEFAULT_DB_NAME}.db")),
            db_max_connections: 5,
            expose_storage_errors: false,
            log_filter: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_path = match (var("DATABASE_PATH"), var("DB_NAME")) {
            (Some(path), _) => PathBuf::from(path),
            (None, Some(name)) if name.ends_with(".db") => PathBuf::from(name),
            (None, Some(name)) => PathBuf::from(format!("{name}.db")),
            (None, None) => defaults.database_path,
        };

        let config = ApiConfig {
            host: var("HOST").unwrap_or(defaults.host),

            port: var("PORT")
                .map(|v| v.trim().parse::<u16>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?
                .unwrap_or(defaults.port),

            database_path,

            db_max_connections: var("DB_MAX_CONNECTIONS")
                .map(|v| v.trim().parse::<u32>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?
                .unwrap_or(defaults.db_max_connections),

            expose_storage_errors: var("EXPOSE_STORAGE_ERRORS")
                .map(|v| parse_bool(&v))
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("EXPOSE_STORAGE_ERRORS".to_string()))?
                .unwrap_or(defaults.expose_storage_errors),

            log_filter: var("RUST_LOG").unwrap_or(defaults.log_filter),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Database pool configuration derived from this config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.db_max_connections)
    }
}

fn parse_bool(raw: &str) -> Result<bool, ()> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(()),
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("stockroom.db"));
        assert!(!config.expose_storage_errors);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_NAME", "inventario"),
            ("DB_MAX_CONNECTIONS", "8"),
            ("EXPOSE_STORAGE_ERRORS", "true"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_path, PathBuf::from("inventario.db"));
        assert_eq!(config.db_max_connections, 8);
        assert!(config.expose_storage_errors);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.db_config().max_connections, 8);
    }

    #[test]
    fn test_database_path_wins_over_db_name() {
        let config = load(&[("DB_NAME", "ignored"), ("DATABASE_PATH", "/var/lib/stock.sqlite")]).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/lib/stock.sqlite"));

        let config = load(&[("DB_NAME", "tienda.db")]).unwrap();
        assert_eq!(config.database_path, PathBuf::from("tienda.db"));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("PORT", "abc")]),
            Err(ConfigError::InvalidValue("PORT".to_string()))
        );
        assert_eq!(
            load(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))
        );
        assert_eq!(
            load(&[("EXPOSE_STORAGE_ERRORS", "maybe")]),
            Err(ConfigError::InvalidValue("EXPOSE_STORAGE_ERRORS".to_string()))
        );
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("PORT", "  "), ("HOST", "")]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }
}
