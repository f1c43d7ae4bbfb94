mod query_param;
mod record_id;
