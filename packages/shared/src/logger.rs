//! Logger setup shared by the Roster binaries.

use std::fmt;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

use crate::time::now_jst;

/// Timestamp format used in log lines (RFC 3339 with milliseconds, JST)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Formats event timestamps in JST.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", now_jst().format(TIMESTAMP_FORMAT))
    }
}

/// Build the default filter directive for a binary.
///
/// Tracing targets use the crate name, so `-` in the binary name is
/// normalized to `_`.
pub fn default_directive(bin_name: &str, level: LevelFilter) -> String {
    format!("{}={}", bin_name.replace('-', "_"), level)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise events from `bin_name` at
/// `default_level` and above are emitted. Logs are written to stderr so
/// that stdout carries only program output.
///
/// # Arguments
///
/// * `bin_name` - Binary name, usually `env!("CARGO_BIN_NAME")`
/// * `default_level` - Level used when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(JstTimer)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    // A subscriber may already be installed (e.g. by a test harness).
    if result.is_err() {
        tracing::debug!("Global subscriber already set, keeping it");
    }
}
