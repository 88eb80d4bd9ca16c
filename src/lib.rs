//! metasnap library: page metadata scoring and social previews
//!
//! Fetches a web page, reads the metadata in its `<head>`, scores it out of
//! 100 across seven categories, explains the score as a list of feedback
//! items, and renders plain-text previews of how the page would appear in a
//! search result and on social platforms.
//!
//! # Example
//!
//! ```no_run
//! use metasnap::{analyze_url, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = analyze_url(&Config::default(), "https://example.com").await?;
//! println!("Score: {}/100", result.score);
//! for item in &result.feedback {
//!     println!("[{}] {}", item.kind, item.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime for anything that fetches.
//! [`analyzer::analyze_document`] works on an already-parsed page and does not.

#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod server;
mod utils;

// Re-export public API
pub use analyzer::{AnalysisResult, Analyzer, FeedbackItem, FeedbackKind, MetaTags, PreviewData, ScoreBreakdown};
pub use config::{Config, LogFormat, LogLevel};
pub use fetch::{Fetcher, HttpFetcher};
pub use server::{create_router, run_server};

/// Analyzes one URL with a fresh HTTP client built from `config`.
///
/// Fetch and parse failures are reported inside the returned result, as the
/// API does. Only client construction can fail.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn analyze_url(
    config: &Config,
    url: &str,
) -> Result<AnalysisResult, error_handling::InitializationError> {
    let fetcher = HttpFetcher::from_config(config)?;
    Ok(Analyzer::new(fetcher).analyze(url).await)
}
