use crate::{QueryParam, RecordId, User};

use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;

/// Store capability consumed by [`UserService`](crate::UserService).
///
/// Implementations own pooling, transactions, timeouts and id assignment.
/// A lookup miss is `Ok(None)`; `Err` is reserved for store failures.
#[async_trait]
pub trait Connection: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Run a parameterized lookup and return the first matching user, if any.
    async fn execute_query(
        &self,
        query: &str,
        params: &[QueryParam],
    ) -> Result<Option<User>, Self::Error>;

    /// Persist a user and return the id the store assigned to it.
    async fn save(&self, user: &User) -> Result<RecordId, Self::Error>;
}

#[async_trait]
impl<C> Connection for Arc<C>
where
    C: Connection + ?Sized,
{
    type Error = C::Error;

    async fn execute_query(
        &self,
        query: &str,
        params: &[QueryParam],
    ) -> Result<Option<User>, Self::Error> {
        (**self).execute_query(query, params).await
    }

    async fn save(&self, user: &User) -> Result<RecordId, Self::Error> {
        (**self).save(user).await
    }
}
