use crate::DEFAULT_LOG_LEVEL_STRING;

use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Wrapper for LevelFilter with lenient deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL_STRING));

        let Ok(level) = LogLevel::from_str(&s);
        Ok(level)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        };

        Ok(LogLevel(level))
    }
}
