//! Configuration constants.
//!
//! This module defines the operational constants used throughout the application,
//! including the fetch timeout, body size limits and server defaults.

/// Per-request fetch timeout in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// User-Agent the fetcher identifies itself with.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MetaSnapBot/1.0)";

/// Maximum number of redirect hops followed before the fetch fails.
pub const MAX_REDIRECTS: usize = 10;

/// Maximum response body size in bytes (2MB).
/// Bytes past this limit are dropped before the page is parsed.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum length of a failure cause echoed back in feedback.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

// Server defaults
/// Default address the API server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default port the API server listens on.
pub const DEFAULT_PORT: u16 = 8080;
/// Browser origin allowed to call the API (the frontend dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
