//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the level passed in.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber at `info`
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the global subscriber; a second call is a no-op
pub fn init_logger_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cervejaria_client={level},shared={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
