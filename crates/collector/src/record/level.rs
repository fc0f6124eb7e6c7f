use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log record.
///
/// The set is closed; every upstream level name must map onto one of these
/// before a record can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized level: {0:?}")]
pub struct UnknownLevel(pub String);

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Lenient level parsing for upstream shapes that carry the level as text.
    ///
    /// Unrecognized names normalize to [`Level::Info`] instead of failing, so
    /// one event with a novel level name cannot poison an otherwise healthy
    /// batch. Callers that want a hard failure use [`FromStr`] instead.
    pub fn parse_or_default(text: &str) -> Level {
        match text.parse() {
            Ok(level) => level,
            Err(_) => {
                tracing::debug!(level = text, "unrecognized level name, defaulting to INFO");
                Level::Info
            }
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    /// Case-insensitive match against the closed set. `WARNING` is accepted
    /// as an alias for `WARN` since both spellings occur in the wild.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
