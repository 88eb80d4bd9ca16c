//! Command-line interface.

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_USER_AGENT,
    FETCH_TIMEOUT_SECS,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Top-level command line.
///
/// # Examples
///
/// ```bash
/// # Serve the API on the default port
/// metasnap
///
/// # Serve on another port for a different frontend origin
/// metasnap serve --port 9000 --allowed-origin http://localhost:3000
///
/// # Analyze a single page and print the JSON result
/// metasnap analyze https://example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "metasnap",
    version,
    about = "Scores a page's SEO and social metadata and renders social previews."
)]
pub struct Cli {
    /// What to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub opt: Opt,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (`POST /api/analyze`)
    Serve,
    /// Analyze one URL and print the result as JSON
    Analyze {
        /// URL of the page to analyze
        url: String,
    },
}

/// Options accepted before or after the subcommand.
#[derive(Debug, Args)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Address to bind the API server to
    #[arg(long, global = true, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Browser origin allowed to call the API
    #[arg(long, global = true, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// Per-request fetch timeout in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            log_level: opt.log_level,
            log_format: opt.log_format,
            bind: opt.bind,
            port: opt.port,
            allowed_origin: opt.allowed_origin,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
        }
    }
}
