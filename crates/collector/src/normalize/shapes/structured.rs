//! Structured shape — core logging events with typed accessors and an
//! optional attached error object.
//!
//! The level travels as its textual name and is re-parsed into the closed
//! set here, which defends against enum drift between producer versions. An
//! attached failure is rendered into the same line-array format the legacy
//! shape delivers pre-rendered.

use std::collections::HashMap;

use crate::record::{Level, LogRecord};
use crate::resolve::component::{component_label, ContextLookup};

/// An error object attached to a structured event.
#[derive(Debug, Clone)]
pub struct Thrown {
    /// Fully-qualified type of the failure.
    pub type_name: String,
    /// Localized failure message.
    pub message: String,
    /// Frame descriptions, top frame first.
    pub frames: Vec<String>,
}

impl Thrown {
    /// Render to the canonical line array: line 0 is `<type>: <message>`,
    /// each frame becomes `    at <frame>`, original order preserved.
    pub(crate) fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.frames.len() + 1);
        lines.push(format!("{}: {}", self.type_name, self.message));

        for frame in &self.frames {
            lines.push(format!("    at {frame}"));
        }

        lines
    }
}

#[derive(Debug, Clone)]
pub struct StructuredEvent {
    /// Millisecond clock reading at emission time.
    pub clock_millis: i64,
    pub logger: String,
    /// Textual level name as the producer spelled it.
    pub level_name: String,
    /// Pre-formatted rendering of the structured message object.
    pub formatted_message: String,
    pub thread: String,
    pub context: HashMap<String, String>,
    pub thrown: Option<Thrown>,
}

impl ContextLookup for StructuredEvent {
    fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

pub(crate) fn to_record(event: StructuredEvent, host: Option<String>) -> LogRecord {
    let component = component_label(&event);
    let stack_lines = event.thrown.as_ref().map(Thrown::render);

    LogRecord {
        timestamp: event.clock_millis,
        logger: event.logger,
        level: Level::parse_or_default(&event.level_name),
        message: event.formatted_message,
        thread: event.thread,
        host,
        component,
        stack_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> StructuredEvent {
        StructuredEvent {
            clock_millis: 1_700_000_000_000,
            logger: "com.example.Worker".to_string(),
            level_name: "WARN".to_string(),
            formatted_message: "retrying".to_string(),
            thread: "pool-1-thread-2".to_string(),
            context: HashMap::new(),
            thrown: None,
        }
    }

    #[test]
    fn test_level_reparsed_from_name() {
        let record = to_record(event(), None);
        assert_eq!(record.level(), Level::Warn);
    }

    #[test]
    fn test_unknown_level_name_defaults_to_info() {
        let mut event = event();
        event.level_name = "whatever".to_string();

        let record = to_record(event, None);
        assert_eq!(record.level(), Level::Info);
    }

    #[test]
    fn test_no_thrown_means_no_stack_lines() {
        let record = to_record(event(), None);
        assert!(record.stack_lines().is_none());
        assert!(!record.has_failure());
    }

    #[test]
    fn test_thrown_renders_type_message_and_frames() {
        let mut event = event();
        event.thrown = Some(Thrown {
            type_name: "java.lang.NullPointerException".to_string(),
            message: "name was null".to_string(),
            frames: vec![
                "com.example.Worker.run(Worker.java:33)".to_string(),
                "java.lang.Thread.run(Thread.java:750)".to_string(),
                "jdk.internal.misc.Unsafe.park(Native Method)".to_string(),
            ],
        });

        let record = to_record(event, None);
        let lines = record.stack_lines().unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "java.lang.NullPointerException: name was null");
        for line in &lines[1..] {
            assert!(line.starts_with("    at "), "bad frame line: {line:?}");
        }
        assert_eq!(lines[1], "    at com.example.Worker.run(Worker.java:33)");
        assert_eq!(lines[3], "    at jdk.internal.misc.Unsafe.park(Native Method)");
    }

    #[test]
    fn test_thrown_with_no_frames_still_has_head_line() {
        let mut event = event();
        event.thrown = Some(Thrown {
            type_name: "java.lang.OutOfMemoryError".to_string(),
            message: "heap".to_string(),
            frames: Vec::new(),
        });

        let record = to_record(event, None);
        assert_eq!(
            record.stack_lines().unwrap(),
            &["java.lang.OutOfMemoryError: heap".to_string()]
        );
    }

    #[test]
    fn test_component_from_context_map() {
        let mut event = event();
        event
            .context
            .insert("application".to_string(), "ingest".to_string());

        let record = to_record(event, None);
        assert_eq!(record.component(), Some("ingest"));
    }
}
