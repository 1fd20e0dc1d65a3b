//! Telemetry logic.
//! Support tracing and logging.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a global subscriber driven by `RUST_LOG`, defaulting to `info`.
///
/// Submitted secrets are never recorded as fields, so no scrubbing layer is
/// needed here.
pub fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(fmt::layer())
        .init();
}
