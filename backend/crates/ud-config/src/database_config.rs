use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory.
    pub path: String,
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        // Keep the database inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}
