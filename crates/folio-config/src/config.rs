use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig, ServerConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides (DATABASE_URL, FOLIO_*)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".folio"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL")
            && !url.trim().is_empty()
        {
            self.database.url = Some(url);
        }
        if let Ok(host) = std::env::var("FOLIO_HOST")
            && !host.trim().is_empty()
        {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("FOLIO_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            self.server.port = port;
        }
        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            // FromStr is total, unknown values fall back to info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup; a missing
    /// database connection string is fatal here, not at first query.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.require_url()?;

        if self.database.max_connections == 0 {
            return Err(ConfigError::database(
                "database.max_connections must be at least 1",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::database(
                "database.min_connections cannot exceed database.max_connections",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the connection string).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: url={}, pool {}..{} connections, acquire timeout {}s",
            if self.database.url.is_some() {
                "set"
            } else {
                "missing"
            },
            self.database.min_connections,
            self.database.max_connections,
            self.database.acquire_timeout_secs,
        );
        info!(
            "  logging: level={:?}, output={}",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout"),
        );
    }
}
