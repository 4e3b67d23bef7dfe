pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, Result as ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 2;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
