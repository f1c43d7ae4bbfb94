use ud_db::SqliteConnection;

use sqlx::SqlitePool;

/// Creates an in-memory connection with migrations run
pub async fn create_test_connection() -> SqliteConnection {
    SqliteConnection::in_memory()
        .await
        .expect("Failed to create test connection")
}

/// Inserts a user row directly, bypassing the connection under test
pub async fn insert_user_row(pool: &SqlitePool, username: &str, email: &str) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (username, email) VALUES (?, ?)")
        .bind(username)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert test user")
        .last_insert_rowid()
}

/// Counts rows in the users table
pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
