//! Logging utilities for the booking workspace.
//!
//! All crates log through the `tracing` facade. Binaries call [`init`] or
//! [`init_with_level`] once at startup; library code never installs a subscriber.

use tracing::{error, info, Level};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use booking_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // A second call is harmless, the first subscriber stays installed
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honored; the `booking` target is additionally raised to `level`.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("booking={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global default subscriber may already be set (tests, embedding binaries)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
