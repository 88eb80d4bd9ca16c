//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Coarse classification of a transport failure.
///
/// Only used to word the failure cause; the analyzer does not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RequestFailure {
    /// The request exceeded the fetch timeout.
    #[strum(serialize = "Request timed out")]
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    #[strum(serialize = "Connection failed")]
    Connect,
    /// The redirect chain was too long or looped.
    #[strum(serialize = "Too many redirects")]
    Redirect,
    /// The response body could not be read.
    #[strum(serialize = "Failed to read response body")]
    Body,
    /// The response could not be decoded.
    #[strum(serialize = "Failed to decode response")]
    Decode,
    /// The request could not be built or sent.
    #[strum(serialize = "Request failed")]
    Request,
}

/// Failure to fetch a page.
///
/// Every variant ends up as the same `missing` feedback item; the message
/// carries the variant's description as the cause.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL was empty or only whitespace.
    #[error("URL must not be empty")]
    EmptyUrl,

    /// The URL could not be parsed.
    #[error("Malformed URL '{url}': {source}")]
    InvalidUrl {
        /// The URL as supplied
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The URL uses a scheme other than http or https.
    #[error("Only http and https URLs are supported, got scheme '{0}'")]
    UnsupportedScheme(String),

    /// The request failed at the transport level.
    #[error("{kind} for {url}: {source}")]
    Request {
        /// URL that was requested
        url: String,
        /// Classification of the failure
        kind: RequestFailure,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error fetching URL. Status={status}, URL={url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Final URL after redirects
        url: String,
    },
}

/// Rejections produced by the HTTP API before the analyzer runs.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The request body had no usable `url`.
    #[error("URL is required")]
    MissingUrl,

    /// The request body was not valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
