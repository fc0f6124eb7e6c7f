//! Normalization domain — the multi-shape event adapter.
//!
//! Three upstream event shapes arrive from log sources:
//!
//! - `shapes/legacy.rs`: append-style events with pre-rendered fields
//! - `shapes/structured.rs`: structured core events with an attached error object
//! - `shapes/field_map.rs`: flattened string-keyed maps from a deserialized payload
//!
//! A single [`Normalizer`] pattern-matches on the shape tag and produces the
//! same canonical [`LogRecord`] for all of them, delegating host and
//! component derivation to [`crate::resolve`] so the derived fields carry
//! identical semantics regardless of input shape.

pub mod shapes;

use thiserror::Error;

use crate::conf::CollectorConfig;
use crate::record::LogRecord;
use crate::resolve::host::HostResolver;

pub use shapes::{FieldMapEvent, LegacyEvent, StructuredEvent, Thrown};

/// Record-level construction failure. Fatal to the single record only; the
/// rest of the batch is unaffected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// An upstream event, tagged by shape.
#[derive(Debug, Clone)]
pub enum SourceEvent {
    Legacy(LegacyEvent),
    Structured(StructuredEvent),
    FieldMap(FieldMapEvent),
}

/// Converts upstream events of any shape into canonical records.
///
/// Holds the shared [`HostResolver`]; cloning the normalizer hands each
/// source its own handle onto the same host cache.
#[derive(Clone)]
pub struct Normalizer {
    hosts: HostResolver,
    resolve_hosts: bool,
}

impl Normalizer {
    pub fn new(hosts: HostResolver) -> Self {
        Self {
            hosts,
            resolve_hosts: true,
        }
    }

    pub fn with_config(hosts: HostResolver, config: &CollectorConfig) -> Self {
        Self {
            hosts,
            resolve_hosts: config.resolve_hosts,
        }
    }

    pub fn host_resolver(&self) -> &HostResolver {
        &self.hosts
    }

    /// Normalize one upstream event produced on `origin_host`.
    ///
    /// The legacy and structured shapes cannot fail: their fields are typed.
    /// Field-map construction fails on a missing required key or a
    /// non-numeric timestamp.
    pub fn normalize(&self, origin_host: &str, event: SourceEvent) -> Result<LogRecord, ParseError> {
        let host = if self.resolve_hosts {
            Some(self.hosts.resolve(origin_host))
        } else {
            None
        };

        match event {
            SourceEvent::Legacy(event) => Ok(shapes::legacy::to_record(event, host)),
            SourceEvent::Structured(event) => Ok(shapes::structured::to_record(event, host)),
            SourceEvent::FieldMap(event) => shapes::field_map::to_record(event, host),
        }
    }

    /// Normalize a batch, isolating per-record failures.
    ///
    /// Malformed records are logged and skipped; the surviving records keep
    /// their source order.
    pub fn normalize_batch(&self, origin_host: &str, events: Vec<SourceEvent>) -> Vec<LogRecord> {
        let mut records = Vec::with_capacity(events.len());

        for event in events {
            match self.normalize(origin_host, event) {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!(host = origin_host, %error, "skipping malformed record");
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;
    use crate::resolve::host::ReverseDns;
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    struct NoDns;

    impl ReverseDns for NoDns {
        fn reverse(&self, _addr: Ipv4Addr) -> Option<String> {
            None
        }
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(HostResolver::new(Box::new(NoDns)))
    }

    fn context() -> HashMap<String, String> {
        HashMap::from([("component".to_string(), "billing".to_string())])
    }

    fn stack_frames() -> Vec<String> {
        vec![
            "com.example.App.charge(App.java:42)".to_string(),
            "com.example.Main.main(Main.java:10)".to_string(),
        ]
    }

    fn rendered_stack() -> Vec<String> {
        vec![
            "java.lang.IllegalStateException: no account".to_string(),
            "    at com.example.App.charge(App.java:42)".to_string(),
            "    at com.example.Main.main(Main.java:10)".to_string(),
        ]
    }

    fn legacy_event() -> LegacyEvent {
        LegacyEvent {
            timestamp: 1_700_000_000_000,
            logger: "com.example.App".to_string(),
            level: Level::Error,
            message: "charge failed".to_string(),
            thread: "main".to_string(),
            mdc: context(),
            stack_lines: Some(rendered_stack()),
        }
    }

    fn structured_event() -> StructuredEvent {
        StructuredEvent {
            clock_millis: 1_700_000_000_000,
            logger: "com.example.App".to_string(),
            level_name: "ERROR".to_string(),
            formatted_message: "charge failed".to_string(),
            thread: "main".to_string(),
            context: context(),
            thrown: Some(Thrown {
                type_name: "java.lang.IllegalStateException".to_string(),
                message: "no account".to_string(),
                frames: stack_frames(),
            }),
        }
    }

    fn field_map_event() -> FieldMapEvent {
        FieldMapEvent::new(HashMap::from([
            ("timestamp".to_string(), "1700000000000".to_string()),
            ("logger".to_string(), "com.example.App".to_string()),
            ("level".to_string(), "error".to_string()),
            ("message".to_string(), "charge failed".to_string()),
            ("thread".to_string(), "main".to_string()),
            ("component".to_string(), "billing".to_string()),
            ("throwable".to_string(), rendered_stack().join("\n")),
        ]))
    }

    // ─── Cross-shape equivalence ────────────────────────────────

    #[test]
    fn test_equivalent_inputs_yield_identical_records() {
        let normalizer = normalizer();

        let legacy = normalizer
            .normalize("myhost", SourceEvent::Legacy(legacy_event()))
            .unwrap();
        let structured = normalizer
            .normalize("myhost", SourceEvent::Structured(structured_event()))
            .unwrap();
        let field_map = normalizer
            .normalize("myhost", SourceEvent::FieldMap(field_map_event()))
            .unwrap();

        assert_eq!(legacy, structured);
        assert_eq!(structured, field_map);

        assert_eq!(legacy.host(), Some("myhost"));
        assert_eq!(legacy.component(), Some("billing"));
        assert_eq!(legacy.stack_lines().unwrap().len(), 3);
    }

    // ─── Host handling ──────────────────────────────────────────

    #[test]
    fn test_host_resolution_not_requested() {
        let hosts = HostResolver::new(Box::new(NoDns));
        let config = CollectorConfig {
            resolve_hosts: false,
            ..CollectorConfig::default()
        };
        let normalizer = Normalizer::with_config(hosts, &config);

        let record = normalizer
            .normalize("myhost", SourceEvent::Legacy(legacy_event()))
            .unwrap();

        assert_eq!(record.host(), None);
    }

    #[test]
    fn test_unresolvable_ip_host_keeps_raw_value() {
        let normalizer = normalizer();

        let record = normalizer
            .normalize("192.168.1.1", SourceEvent::Legacy(legacy_event()))
            .unwrap();

        assert_eq!(record.host(), Some("192.168.1.1"));
    }

    // ─── Batch isolation ────────────────────────────────────────

    #[test]
    fn test_batch_survives_malformed_record() {
        let normalizer = normalizer();

        let mut broken = field_map_event();
        broken.insert("timestamp".to_string(), "not-a-number".to_string());

        let records = normalizer.normalize_batch(
            "myhost",
            vec![
                SourceEvent::FieldMap(field_map_event()),
                SourceEvent::FieldMap(broken),
                SourceEvent::Legacy(legacy_event()),
            ],
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "charge failed");
        assert_eq!(records[1].level(), Level::Error);
    }

    #[test]
    fn test_empty_batch() {
        let normalizer = normalizer();
        assert!(normalizer.normalize_batch("myhost", Vec::new()).is_empty());
    }
}
