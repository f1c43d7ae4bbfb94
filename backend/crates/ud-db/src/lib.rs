pub mod connection;
pub mod error;

pub use connection::sqlite_connection::SqliteConnection;
pub use error::{DbError, Result};
