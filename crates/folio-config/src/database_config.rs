use crate::{
    DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MIN_CONNECTIONS,
};

use serde::Deserialize;

/// Database connection settings.
///
/// `url` has no default: it must come from `config.toml` or the
/// `DATABASE_URL` environment variable, and `Config::validate()` fails
/// without it. Pool bounds and timeouts are static configuration; nothing
/// here adapts at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// The connection string, or an error when it was never supplied.
    pub fn require_url(&self) -> Result<&str, crate::ConfigError> {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(crate::ConfigError::database(
                "database.url is not set; define DATABASE_URL or database.url in config.toml",
            )),
        }
    }
}
