//! Configuration types shared by the CLI and the library.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_USER_AGENT,
    FETCH_TIMEOUT_SECS,
};

/// Log verbosity selected on the command line.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log line format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Runtime configuration for the server and the fetcher.
///
/// Built from [`crate::config::Opt`] by the binary, or directly by library users.
///
/// # Examples
///
/// ```no_run
/// use metasnap::Config;
///
/// let config = Config {
///     port: 9000,
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Address the API server binds to
    pub bind: String,

    /// Port the API server listens on
    pub port: u16,

    /// Browser origin allowed by CORS
    pub allowed_origin: String,

    /// Per-request fetch timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
