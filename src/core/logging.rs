//! Tracing subscriber setup
//!
//! Logs always go to stderr: stdout carries CLI output and the MCP stdio
//! transport.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// is harmless; the second call is ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tagbooster={}", config.level)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
