use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ud_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ud_db::DbError),

    #[error("User {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        CliError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
