// flowgen — Structured logging via tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Log level is controlled by the `FLOWGEN_LOG` env var (default: `info`).
/// Examples:
///   FLOWGEN_LOG=debug
///   FLOWGEN_LOG=flowgen::provider=trace,info
pub fn init() {
    let filter = EnvFilter::try_from_env("FLOWGEN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
