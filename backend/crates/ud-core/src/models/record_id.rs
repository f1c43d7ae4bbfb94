use std::fmt;

use serde::{Deserialize, Serialize};

/// Row identifier assigned by the store when a record is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
