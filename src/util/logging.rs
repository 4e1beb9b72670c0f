//! Structured logging setup for genpick
//!
//! Logs go to stderr so that stdout only carries command output. The
//! subscriber is installed once per process; later calls are ignored.
//!
//! # Example
//!
//! ```no_run
//! use genpick::util::logging;
//! use tracing::{debug, info};
//!
//! logging::init_from_env(None);
//!
//! info!("Resolving inputs");
//! debug!(input = "Customer.java", matches = 3, "Resolved input");
//! ```

use std::env;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for genpick's own events
    pub level: Level,

    /// Emit one JSON object per event
    pub use_json: bool,

    /// Include the module target (e.g., genpick::resolve) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: false,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `GENPICK_LOG_LEVEL` and `GENPICK_LOG_JSON`
    ///
    /// An explicit `level` wins and leaves `GENPICK_LOG_LEVEL` unread.
    pub fn from_env(level: Option<Level>) -> Self {
        let level = level.unwrap_or_else(|| {
            env::var("GENPICK_LOG_LEVEL")
                .map(|value| parse_level(&value))
                .unwrap_or(Level::INFO)
        });

        let use_json = env::var("GENPICK_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,genpick={}", self.level)))
    }
}

/// Parses a log level, case-insensitively
///
/// Unknown values are reported on stderr and fall back to `INFO`.
///
/// ```
/// use genpick::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber
///
/// `RUST_LOG`, when set, replaces the level from `config`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter();

        // try_init: a test harness may already own the global subscriber
        let _ = if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .try_init()
        };
    });
}

/// Initializes logging from `GENPICK_LOG_LEVEL` and `GENPICK_LOG_JSON`
///
/// A `level` given on the command line replaces `GENPICK_LOG_LEVEL`.
pub fn init_from_env(level: Option<Level>) {
    init_logging(LoggingConfig::from_env(level));
}
