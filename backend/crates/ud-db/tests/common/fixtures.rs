use ud_core::User;

/// Creates the canonical test user
pub fn create_test_user() -> User {
    User::new("alice", "alice@example.com")
}

/// Creates a test user with a derived email
pub fn create_named_user(username: &str) -> User {
    User::new(username, format!("{}@example.com", username))
}
