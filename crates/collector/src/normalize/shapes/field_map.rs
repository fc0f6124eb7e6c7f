//! Field-map shape — flattened string-keyed textual fields, as produced by a
//! deserialized wire payload.
//!
//! Required keys: `timestamp`, `logger`, `level`, `message`, `thread`.
//! Optional: `throwable` (newline-joined trace) and the context keys
//! consulted for the component label, which live in the same flat map.
//!
//! The `throwable` value is split on `'\n'` as-is: an embedded newline inside
//! one logical frame is indistinguishable from a frame boundary. Producers
//! that need exact frames must escape newlines before flattening.

use std::collections::HashMap;

use crate::normalize::ParseError;
use crate::record::{Level, LogRecord};
use crate::resolve::component::{component_label, ContextLookup};

#[derive(Debug, Clone, Default)]
pub struct FieldMapEvent {
    fields: HashMap<String, String>,
}

impl FieldMapEvent {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Flatten a deserialized JSON object into a field map.
    ///
    /// String values are taken as-is; numbers and booleans are rendered
    /// textually; nulls are treated as absent. Nested arrays or objects are
    /// rejected; the wire format is flat by contract.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ParseError> {
        let serde_json::Value::Object(entries) = value else {
            return Err(ParseError::InvalidPayload(
                "expected a top-level object".to_string(),
            ));
        };

        let mut fields = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => continue,
                other => {
                    return Err(ParseError::InvalidPayload(format!(
                        "nested value under key {key:?}: {other}"
                    )));
                }
            };
            fields.insert(key, text);
        }

        Ok(Self { fields })
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn required(&self, key: &'static str) -> Result<&str, ParseError> {
        self.get(key).ok_or(ParseError::MissingField(key))
    }
}

impl ContextLookup for FieldMapEvent {
    fn context_value(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

pub(crate) fn to_record(event: FieldMapEvent, host: Option<String>) -> Result<LogRecord, ParseError> {
    let timestamp_text = event.required("timestamp")?;
    let timestamp: i64 = timestamp_text
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(timestamp_text.to_string()))?;

    let level = Level::parse_or_default(&event.required("level")?.to_ascii_uppercase());

    let logger = event.required("logger")?.to_string();
    let message = event.required("message")?.to_string();
    let thread = event.required("thread")?.to_string();

    let component = component_label(&event);
    let stack_lines = event
        .get("throwable")
        .map(|trace| trace.split('\n').map(str::to_string).collect());

    Ok(LogRecord {
        timestamp,
        logger,
        level,
        message,
        thread,
        host,
        component,
        stack_lines,
    })
}
