//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::CollectorConfig;

impl CollectorConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("COLLECTOR_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/collector/collector.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Some(resolve) = env_bool("COLLECTOR_RESOLVE_HOSTS") {
            config.resolve_hosts = resolve;
        }
        if let Some(timeout) = env_u64("COLLECTOR_DNS_TIMEOUT_MS") {
            config.dns_timeout_ms = timeout;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: CollectorConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            resolve_hosts: env_bool("COLLECTOR_RESOLVE_HOSTS").unwrap_or(defaults.resolve_hosts),
            dns_timeout_ms: env_u64("COLLECTOR_DNS_TIMEOUT_MS").unwrap_or(defaults.dns_timeout_ms),
        }
    }
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}
