//! Telemetry — tracing subscriber bootstrap for binaries embedding the
//! collector.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
