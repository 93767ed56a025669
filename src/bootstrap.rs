//! Logging setup for the dashboard binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Build the log filter: `RUST_LOG` when set and valid, otherwise `log_level`,
/// otherwise `info`.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the global `tracing` subscriber, writing to stderr so stdout
/// carries only the summary.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(log_filter(log_level))
        .with(layer)
        .try_init()?;

    Ok(())
}
