use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode column '{column}': {source} {location}")]
    RowDecode {
        column: &'static str,
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn row_decode(column: &'static str, source: sqlx::Error) -> Self {
        Self::RowDecode {
            column,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
