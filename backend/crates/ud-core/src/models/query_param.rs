use std::fmt;

/// Positional parameter bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Integer(i64),
    Text(String),
}

impl From<i64> for QueryParam {
    fn from(value: i64) -> Self {
        QueryParam::Integer(value)
    }
}

impl From<&str> for QueryParam {
    fn from(value: &str) -> Self {
        QueryParam::Text(value.to_string())
    }
}

impl From<String> for QueryParam {
    fn from(value: String) -> Self {
        QueryParam::Text(value)
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParam::Integer(value) => write!(f, "{}", value),
            QueryParam::Text(value) => write!(f, "'{}'", value),
        }
    }
}
