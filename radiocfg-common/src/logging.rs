//! Logging infrastructure for radiocfg
//!
//! This module provides configurable logging using the `tracing` crate and a
//! helper for reporting document validation outcomes.

use std::fmt;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::ValidationError;

/// Crates whose events [`LogLevel::directives`] enables.
pub const LOG_TARGETS: [&str; 3] = ["radiocfg_common", "radiocfg_plmn", "radiocfg_ran"];

/// Verbosity of radiocfg's own events.
///
/// Events from other crates stay at `warn` whatever the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Accepted documents and file loads
    Debug,
    #[default]
    Info,
    /// Rejected documents
    Warn,
    Error,
}

impl LogLevel {
    const ALLOWED: &'static str = "trace, debug, info, warn, error";

    /// Returns the filter name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Builds an `EnvFilter` directive string applying this level to the
    /// radiocfg crates, e.g. `warn,radiocfg_common=debug,...`.
    pub fn directives(&self) -> String {
        LOG_TARGETS
            .iter()
            .fold(String::from("warn"), |mut acc, target| {
                acc.push(',');
                acc.push_str(target);
                acc.push('=');
                acc.push_str(self.as_str());
                acc
            })
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `warning` is accepted as `warn`.
impl FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ValidationError::not_in_enum("logLevel", s, Self::ALLOWED)),
        }
    }
}

/// Installs a subscriber logging radiocfg events at `level`.
///
/// `RUST_LOG`, when set, replaces the filter entirely.
///
/// # Example
///
/// ```
/// use radiocfg_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.directives());
}

/// Initialize logging with a custom filter string.
///
/// Calling it again after a subscriber is installed has no effect.
///
/// # Example
///
/// ```
/// use radiocfg_common::logging::init_logging_with_filter;
///
/// init_logging_with_filter("info,radiocfg_common=debug");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

/// Log the outcome of validating a document of the given kind.
///
/// Accepted documents are logged at debug level, rejected ones at warn level
/// with the offending field path.
pub fn log_validation(kind: &str, name: Option<&str>, result: &Result<(), ValidationError>) {
    let name = name.unwrap_or("<unnamed>");
    match result {
        Ok(()) => tracing::debug!(kind = kind, name = name, "Accepted {}", kind),
        Err(e) => tracing::warn!(
            kind = kind,
            name = name,
            field = %e.field,
            "Rejected {}: {}",
            kind,
            e.violation
        ),
    }
}
