use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Level;

/// The canonical normalized log event.
///
/// One record is produced per upstream event, regardless of which shape the
/// event arrived in, and is never mutated afterwards. Fields are only
/// populated by the normalization pathways in [`crate::normalize`]; consumers
/// read them through the accessors.
///
/// `timestamp` is milliseconds since the Unix epoch and is monotonic only
/// within a single source, never across sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub(crate) timestamp: i64,
    pub(crate) logger: String,
    pub(crate) level: Level,
    pub(crate) message: String,
    pub(crate) thread: String,
    pub(crate) host: Option<String>,
    pub(crate) component: Option<String>,
    pub(crate) stack_lines: Option<Vec<String>>,
}

impl LogRecord {
    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Timestamp as a UTC datetime. `None` if the millisecond value is out
    /// of chrono's representable range.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Name of the originating logger/category.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Pre-formatted human-readable message. Formatting of structured
    /// arguments happens upstream.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Producing thread or task. Synthetic for non-threaded sources.
    pub fn thread(&self) -> &str {
        &self.thread
    }

    /// Resolved display host name. `None` when resolution was not requested.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Logical service/application label, if any metadata source carried one.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Rendered failure trace. Line 0 is the failure's type and message,
    /// subsequent lines are individual frames. `None` when the event carried
    /// no failure.
    pub fn stack_lines(&self) -> Option<&[String]> {
        self.stack_lines.as_deref()
    }

    pub fn has_failure(&self) -> bool {
        self.stack_lines.is_some()
    }
}
