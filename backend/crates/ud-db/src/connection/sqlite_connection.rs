use crate::{DbError, Result};

use ud_core::{Connection, QueryParam, RecordId, User};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{info, trace};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
    SqliteSynchronous,
};
use sqlx::Row;

const INSERT_USER_QUERY: &str = "INSERT INTO users (username, email) VALUES (?, ?)";

/// [`Connection`] backed by a SQLite pool.
pub struct SqliteConnection {
    pool: SqlitePool,
}

impl SqliteConnection {
    /// Wrap an existing pool. Migrations are the caller's responsibility.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file at `path` and run migrations.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!("Opening database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::prepare(pool).await
    }

    /// Open a private in-memory database with migrations applied.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory databases live and die with their single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::prepare(pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn prepare(pool: SqlitePool) -> Result<Self> {
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self::new(pool))
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        info!("Running database migrations...");

        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Database migrations complete");
        Ok(())
    }

    fn decode_user(row: &SqliteRow) -> Result<User> {
        let username: String = row
            .try_get("username")
            .map_err(|e| DbError::row_decode("username", e))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| DbError::row_decode("email", e))?;

        Ok(User::new(username, email))
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    type Error = DbError;

    async fn execute_query(
        &self,
        query: &str,
        params: &[QueryParam],
    ) -> Result<Option<User>> {
        trace!(
            "execute_query: {} [{}]",
            query,
            params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut statement = sqlx::query(query);
        for param in params {
            statement = match param {
                QueryParam::Integer(value) => statement.bind(*value),
                QueryParam::Text(value) => statement.bind(value.as_str()),
            };
        }

        let row = statement.fetch_optional(&self.pool).await?;

        row.as_ref().map(Self::decode_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<RecordId> {
        trace!("save: {}", INSERT_USER_QUERY);

        let result = sqlx::query(INSERT_USER_QUERY)
            .bind(user.username())
            .bind(user.email())
            .execute(&self.pool)
            .await?;

        Ok(RecordId(result.last_insert_rowid()))
    }
}
