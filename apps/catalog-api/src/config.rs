//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use bookstore_db::{DbConfig, PgConnectOptions};

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// HTTP bind host
    pub http_host: String,

    /// HTTP bind port
    pub http_port: u16,

    /// Where the pool connects: `DATABASE_URL`, or the DB_* parts
    pub database: DatabaseTarget,

    /// Pool ceiling
    pub db_max_connections: u32,

    /// Connections kept warm
    pub db_min_connections: u32,

    /// Connection recycle age in seconds
    pub db_max_lifetime_secs: u64,

    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,

    /// Truncate and reseed sample books at startup
    pub seed_on_startup: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts(DbParts {
                host: get("DB_HOST", "localhost"),
                port: parse("DB_PORT", &get("DB_PORT", "5432"))?,
                name: get("DB_NAME", "bookstore"),
                user: get("DB_USER", "bookstore_user"),
                password: get("DB_PASSWORD", "your_strong_password"),
            }),
        };

        let config = ApiConfig {
            http_host: get("HTTP_HOST", "0.0.0.0"),

            http_port: parse("HTTP_PORT", &get("HTTP_PORT", "8080"))?,

            database,

            db_max_connections: parse("DB_MAX_CONNECTIONS", &get("DB_MAX_CONNECTIONS", "25"))?,

            db_min_connections: parse("DB_MIN_CONNECTIONS", &get("DB_MIN_CONNECTIONS", "5"))?,

            db_max_lifetime_secs: parse(
                "DB_MAX_LIFETIME_SECS",
                &get("DB_MAX_LIFETIME_SECS", "300"),
            )?,

            cors_origins: get("CORS_ORIGINS", "")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),

            seed_on_startup: parse("SEED_ON_STARTUP", &get("SEED_ON_STARTUP", "false"))?,
        };

        if config.db_min_connections > config.db_max_connections {
            return Err(ConfigError::InvalidValue("DB_MIN_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address to bind the HTTP listener to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_HOST".to_string()))
    }

    /// Pool configuration for `bookstore_db::Database::new`.
    pub fn db_config(&self) -> Result<DbConfig, ConfigError> {
        let config = match &self.database {
            DatabaseTarget::Url(url) => DbConfig::from_url(url)
                .map_err(|_| ConfigError::InvalidValue("DATABASE_URL".to_string()))?,
            DatabaseTarget::Parts(parts) => DbConfig::from_options(parts.connect_options()),
        };

        Ok(config
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .max_lifetime(Duration::from_secs(self.db_max_lifetime_secs)))
    }
}

/// Connection target for the pool.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseTarget {
    /// Explicit `DATABASE_URL`, parsed as given.
    Url(String),

    /// Individual `DB_*` settings.
    Parts(DbParts),
}

/// Connection settings read from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`
/// and `DB_PASSWORD`.
///
/// These are handed to the driver one by one and never joined into a URL,
/// so a password may contain `@`, `/`, `#` or `:` as is.
#[derive(Clone, PartialEq)]
pub struct DbParts {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbParts {
    /// Driver connection options for these parts.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// Password stays out of logs.
impl fmt::Debug for DbParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbParts")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

fn parse<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.http_host, "0.0.0.0");
        assert_eq!(config.http_port, 8080);
        assert_eq!(
            config.database,
            DatabaseTarget::Parts(DbParts {
                host: "localhost".to_string(),
                port: 5432,
                name: "bookstore".to_string(),
                user: "bookstore_user".to_string(),
                password: "your_strong_password".to_string(),
            })
        );
        assert_eq!(config.db_max_connections, 25);
        assert_eq!(config.db_min_connections, 5);
        assert_eq!(config.db_max_lifetime_secs, 300);
        assert!(config.cors_origins.is_empty());
        assert!(!config.seed_on_startup);
    }

    #[test]
    fn test_connect_options_built_from_parts() {
        let config = load_with(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "catalog"),
            ("DB_USER", "reader"),
            ("DB_PASSWORD", "hunter2"),
        ])
        .unwrap();
        let options = config.db_config().unwrap().connect_options;

        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("catalog"));
        assert_eq!(options.get_username(), "reader");
    }

    #[test]
    fn test_password_with_url_delimiters_does_not_leak_into_host() {
        let config = load_with(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "catalog"),
            ("DB_USER", "reader"),
            ("DB_PASSWORD", "p@ss/w#rd:1"),
        ])
        .unwrap();
        let options = config.db_config().unwrap().connect_options;

        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("catalog"));
        assert_eq!(options.get_username(), "reader");
        assert!(!format!("{:?}", config.database).contains("p@ss"));
    }

    #[test]
    fn test_explicit_database_url_wins() {
        let config = load_with(&[
            ("DATABASE_URL", "postgres://u:p@elsewhere/books"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();

        assert_eq!(
            config.database,
            DatabaseTarget::Url("postgres://u:p@elsewhere/books".to_string())
        );
        let options = config.db_config().unwrap().connect_options;
        assert_eq!(options.get_host(), "elsewhere");
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = load_with(&[(
            "CORS_ORIGINS",
            "http://localhost:3000, https://shop.example.com ,",
        )])
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://shop.example.com"]
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            load_with(&[("HTTP_PORT", "eighty")]),
            Err(ConfigError::InvalidValue("HTTP_PORT".to_string()))
        );
        assert_eq!(
            load_with(&[("SEED_ON_STARTUP", "yes please")]),
            Err(ConfigError::InvalidValue("SEED_ON_STARTUP".to_string()))
        );
        assert_eq!(
            load_with(&[("DB_PORT", "-1")]),
            Err(ConfigError::InvalidValue("DB_PORT".to_string()))
        );
        assert_eq!(
            load_with(&[("DB_MIN_CONNECTIONS", "30")]),
            Err(ConfigError::InvalidValue("DB_MIN_CONNECTIONS".to_string()))
        );
    }

    #[test]
    fn test_seed_flag_and_socket_addr() {
        let config = load_with(&[("SEED_ON_STARTUP", "true"), ("HTTP_PORT", "9090")]).unwrap();

        assert!(config.seed_on_startup);
        assert_eq!(config.socket_addr().unwrap().port(), 9090);
    }

    #[test]
    fn test_db_config_carries_pool_settings() {
        let config = load_with(&[("DB_MAX_CONNECTIONS", "8"), ("DB_MIN_CONNECTIONS", "2")]).unwrap();
        let db = config.db_config().unwrap();

        assert_eq!(db.max_connections, 8);
        assert_eq!(db.min_connections, 2);
        assert_eq!(db.max_lifetime, Duration::from_secs(300));
    }
}
