use std::path::PathBuf;
use std::str::FromStr;

/// Which [`catalog_db::DocumentStore`] implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// In-process store; contents are lost on exit.
    Memory,
}

/// Returned when `CATALOG_STORE` names no known backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown store backend '{0}'")]
pub struct UnknownStoreBackend(pub String);

impl FromStr for StoreBackend {
    type Err = UnknownStoreBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(UnknownStoreBackend(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub store: StoreBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the static frontend served at `/`.
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                  |
    /// |----------------------------|------------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                                |
    /// | `PORT`                     | `3000`                                   |
    /// | `CATALOG_STORE`            | `postgres`                               |
    /// | `DATABASE_URL`             | `postgres://localhost:5432/musicstore`   |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                                     |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                     |
    /// | `FRONTEND_DIR`             | `frontend`                               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "3000"), "a valid port number")?,
            store: parse(
                "CATALOG_STORE",
                var("CATALOG_STORE", "postgres"),
                "`postgres` or `memory`",
            )?,
            database_url: var("DATABASE_URL", "postgres://localhost:5432/musicstore"),
            database_max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS", "20"),
                "a positive integer",
            )?,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "a number of seconds",
            )?,
            frontend_dir: PathBuf::from(var("FRONTEND_DIR", "frontend")),
        })
    }
}

fn parse<T: FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
