use crate::{Connection, QueryParam, User};

use log::debug;

pub const SERVICE_NAME: &str = "UserService";
pub const FIND_USER_BY_ID_QUERY: &str = "SELECT * FROM users WHERE id = ?";

/// Facade over a single injected [`Connection`] for user lookups and creation.
///
/// The service never opens or closes the connection and adds nothing to its
/// failure surface: every error is the connection's own, returned as-is.
pub struct UserService<C: Connection> {
    connection: C,
    service_name: &'static str,
}

impl<C: Connection> UserService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            service_name: SERVICE_NAME,
        }
    }

    pub fn service_name(&self) -> &str {
        self.service_name
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Look up a user by store id. The id is forwarded without validation.
    pub async fn find_user_by_id(&self, user_id: i64) -> Result<Option<User>, C::Error> {
        debug!("{}: find_user_by_id({})", self.service_name, user_id);

        self.connection
            .execute_query(FIND_USER_BY_ID_QUERY, &[QueryParam::Integer(user_id)])
            .await
    }

    pub async fn create_user(&self, username: &str, email: &str) -> Result<(), C::Error> {
        let user = User::new(username, email);
        let id = self.connection.save(&user).await?;

        debug!(
            "{}: created user '{}' with id {}",
            self.service_name, username, id
        );

        Ok(())
    }
}
