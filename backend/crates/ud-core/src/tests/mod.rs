mod models;

use crate::{Connection, QueryParam, RecordId, User};

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum FakeError {
    #[error("connection refused")]
    Refused,

    #[error("constraint violated: {0}")]
    Constraint(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Query {
        query: String,
        params: Vec<QueryParam>,
    },
    Save(User),
}

/// Connection double that records every call and replays canned responses.
pub(crate) struct RecordingConnection {
    calls: Mutex<Vec<Call>>,
    lookup: Mutex<Result<Option<User>, FakeError>>,
    save_result: Mutex<Result<RecordId, FakeError>>,
}

impl RecordingConnection {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            lookup: Mutex::new(Ok(None)),
            save_result: Mutex::new(Ok(RecordId(1))),
        }
    }

    pub(crate) fn returning(self, lookup: Result<Option<User>, FakeError>) -> Self {
        *self.lookup.lock().unwrap() = lookup;
        self
    }

    pub(crate) fn failing_save(self, error: FakeError) -> Self {
        *self.save_result.lock().unwrap() = Err(error);
        self
    }

    pub(crate) fn set_lookup(&self, lookup: Result<Option<User>, FakeError>) {
        *self.lookup.lock().unwrap() = lookup;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    type Error = FakeError;

    async fn execute_query(
        &self,
        query: &str,
        params: &[QueryParam],
    ) -> Result<Option<User>, Self::Error> {
        self.calls.lock().unwrap().push(Call::Query {
            query: query.to_string(),
            params: params.to_vec(),
        });
        self.lookup.lock().unwrap().clone()
    }

    async fn save(&self, user: &User) -> Result<RecordId, Self::Error> {
        self.calls.lock().unwrap().push(Call::Save(user.clone()));
        self.save_result.lock().unwrap().clone()
    }
}
