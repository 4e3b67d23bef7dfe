use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file name; `None` logs to stdout
    pub file: Option<String>,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// Colored output (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            dir: String::from("logs"),
            colored: true,
        }
    }
}
