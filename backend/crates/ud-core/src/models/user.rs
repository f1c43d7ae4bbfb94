use serde::{Deserialize, Serialize};

/// One user account record.
///
/// Carries no identifier: ids are assigned by the store and come back as a
/// [`RecordId`](crate::RecordId) from [`Connection::save`](crate::Connection::save).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    email: String,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
