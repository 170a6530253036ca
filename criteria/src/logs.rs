//! Diagnostic log lines.
//!
//! Every diagnostic goes to stderr with a `[parse_criteria]` prefix so that
//! stdout carries nothing but criteria lines. Entries are emitted through
//! `tracing`; [`init_logging`] installs a subscriber that prints the bare
//! message without timestamp, level or target.

use std::fmt;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Prefix shared by every diagnostic line.
pub const LOG_PREFIX: &str = "[parse_criteria]";

/// Environment variable holding an `EnvFilter` directive (e.g. `warn`).
pub const LOG_ENV: &str = "PARSE_CRITERIA_LOG";

/// Log level of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    /// Command-line usage hint, shown even when quiet
    Usage,
}

/// A single diagnostic line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Usage, message: message.into() }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Info => write!(f, "{} {}", LOG_PREFIX, self.message),
            LogLevel::Warning => write!(f, "{} [WARN] {}", LOG_PREFIX, self.message),
            LogLevel::Error => write!(f, "{} [ERROR] {}", LOG_PREFIX, self.message),
            LogLevel::Usage => write!(f, "{} Usage: {}", LOG_PREFIX, self.message),
        }
    }
}

/// Emit an entry on the diagnostic stream
pub fn log(entry: LogEntry) {
    match entry.level {
        LogLevel::Info => tracing::info!("{}", entry),
        LogLevel::Warning => tracing::warn!("{}", entry),
        LogLevel::Error | LogLevel::Usage => tracing::error!("{}", entry),
    }
}

/// Debug detail, visible with `PARSE_CRITERIA_LOG=debug`
pub fn log_debug(msg: impl Into<String>) {
    tracing::debug!("{} {}", LOG_PREFIX, msg.into());
}

pub fn log_info(msg: impl Into<String>) {
    log(LogEntry::info(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    log(LogEntry::error(msg));
}

pub fn log_usage(msg: impl Into<String>) {
    log(LogEntry::usage(msg));
}

/// Logging configuration derived from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    /// Drop per-row diagnostics, keep warnings and errors.
    pub quiet: bool,
}

/// Install the stderr subscriber.
///
/// `PARSE_CRITERIA_LOG` overrides the level chosen by `config`. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_logging(config: &LogConfig) {
    let default_level = if config.quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .try_init();
}
