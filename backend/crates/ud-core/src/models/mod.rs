pub mod query_param;
pub mod record_id;
pub mod user;
