//! Legacy shape — append-style logging events with pre-rendered fields.
//!
//! Everything arrives already materialized: the timestamp, logger, level,
//! rendered message, and thread name are read directly, and a failure trace
//! (if any) is already a list of rendered lines.

use std::collections::HashMap;

use crate::record::{Level, LogRecord};
use crate::resolve::component::{component_label, ContextLookup};

#[derive(Debug, Clone)]
pub struct LegacyEvent {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub logger: String,
    pub level: Level,
    pub message: String,
    pub thread: String,
    /// Per-event diagnostic context attached by the producer.
    pub mdc: HashMap<String, String>,
    /// Already-rendered failure trace, top frame first.
    pub stack_lines: Option<Vec<String>>,
}

impl ContextLookup for LegacyEvent {
    fn context_value(&self, key: &str) -> Option<&str> {
        self.mdc.get(key).map(String::as_str)
    }
}

pub(crate) fn to_record(event: LegacyEvent, host: Option<String>) -> LogRecord {
    let component = component_label(&event);

    LogRecord {
        timestamp: event.timestamp,
        logger: event.logger,
        level: event.level,
        message: event.message,
        thread: event.thread,
        host,
        component,
        stack_lines: event.stack_lines,
    }
}
