pub mod connection;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use connection::Connection;
pub use models::query_param::QueryParam;
pub use models::record_id::RecordId;
pub use models::user::User;
pub use services::user_service::{FIND_USER_BY_ID_QUERY, SERVICE_NAME, UserService};
