//! Model — CollectorConfig.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Resolve origin hosts to display names. When false, records carry no
    /// host at all.
    pub resolve_hosts: bool,
    /// Upper bound for one reverse-DNS lookup when using the timeout-bounded
    /// resolution path.
    pub dns_timeout_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            resolve_hosts: true,
            dns_timeout_ms: 500,
        }
    }
}

impl CollectorConfig {
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.resolve_hosts && self.dns_timeout_ms == 0 {
            return Err("dns_timeout_ms must be > 0 when resolve_hosts is enabled".to_string());
        }
        Ok(())
    }
}
