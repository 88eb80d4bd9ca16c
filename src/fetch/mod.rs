//! Page fetching.
//!
//! The analyzer depends on the [`Fetcher`] capability only. [`HttpFetcher`] is
//! the production implementation: a shared `reqwest` client with a fixed
//! timeout, a custom User-Agent and a bounded redirect policy.
//!
//! Every failure (blank or malformed URL, DNS, connect, timeout, redirect loop,
//! non-success status, unreadable body) is reported as a [`FetchError`]; the
//! analyzer folds them all into one feedback message.

mod body;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, FetchError, InitializationError};

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// URL the content was served from, after redirects
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    /// Response body decoded with the `Content-Type` charset, else UTF-8
    pub body: String,
}

/// Capability to retrieve a page by URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, following redirects.
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

/// Checks that `url` is non-blank, parses, and uses http or https.
///
/// # Errors
///
/// `EmptyUrl`, `InvalidUrl` or `UnsupportedScheme`.
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(FetchError::EmptyUrl);
    }

    let parsed = Url::parse(trimmed).map_err(|source| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::UnsupportedScheme(scheme.to_string())),
    }
}

/// `reqwest`-backed [`Fetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    max_body_size: usize,
}

impl HttpFetcher {
    /// Wraps an already configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }

    /// Builds the client from configuration (timeout, User-Agent).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = crate::initialization::init_client(config)?;
        Ok(Self::new(client))
    }

    /// Overrides the body size cap.
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let parsed = validate_url(url)?;
        let request_url = parsed.to_string();

        let request_failure = |source: reqwest::Error| FetchError::Request {
            url: request_url.clone(),
            kind: categorize_reqwest_error(&source),
            source,
        };

        let builder = request::apply_to_request_builder(self.client.get(parsed));
        let response = builder.send().await.map_err(request_failure)?;

        let final_url = response.url().to_string();
        let status = response.status();
        debug!("GET {} -> {} ({})", request_url, status.as_u16(), final_url);

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: final_url,
            });
        }

        // Read before the body consumes the response
        let charset = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(body::charset_from_content_type)
            .map(str::to_owned);

        let bytes = body::read_capped(response, self.max_body_size)
            .await
            .map_err(request_failure)?;

        Ok(RawDocument {
            final_url,
            status: status.as_u16(),
            body: body::decode_body(&bytes, charset.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests;
