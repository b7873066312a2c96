//! # rfv-logging
//!
//! Structured logging for the RollForVibes services.
//!
//! - [`init_subscriber`] installs the global `tracing` subscriber: an
//!   [`EnvFilter`] (from `RUST_LOG`, else the configured level) plus either a
//!   compact human-readable or a JSON formatting layer, both on stderr.
//! - [`capture`] holds an in-memory layer for asserting on events in tests.
//!
//! [`EnvFilter`]: tracing_subscriber::EnvFilter

#![deny(unsafe_code)]

pub mod capture;

pub use capture::{CapturedEvent, CapturedLogs, capture_logs};
pub use rfv_settings::{LogFormat, LogLevel, LoggingSettings};

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown at the configured level. Everything else
/// (hyper, reqwest, r2d2) stays at `warn`.
const OWN_TARGETS: &[&str] = &[
    "rfv_agent",
    "rfv_server",
    "rfv_store",
    "rfv_google",
    "rfv_settings",
    "tower_http",
];

/// Build the default filter directive for a level.
///
/// `info` yields `warn,rfv_agent=info,rfv_server=info,…`.
pub fn default_directive(level: LogLevel) -> String {
    let level = level.as_filter_str();
    let mut directive = String::from("warn");
    for target in OWN_TARGETS {
        directive.push(',');
        directive.push_str(target);
        directive.push('=');
        directive.push_str(level);
    }
    directive
}

/// Resolve the filter: `RUST_LOG` when set and valid, else the configured level.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Initialize the global tracing subscriber.
///
/// Call once at application startup. Subsequent calls are no-ops.
pub fn init_subscriber(settings: &LoggingSettings) {
    let filter = build_filter(settings.level);

    // try_init is a no-op if a global subscriber is already set
    match settings.format {
        LogFormat::Pretty => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact()
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .try_init();
        }
    }
}
