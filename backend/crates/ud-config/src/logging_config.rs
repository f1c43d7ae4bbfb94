use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the config directory.
    pub dir: String,
    /// Log file name inside `dir`. `None` logs to stdout.
    pub file: Option<String>,
    pub colored: bool,
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref file) = self.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}
