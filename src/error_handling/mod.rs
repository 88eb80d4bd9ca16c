//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and the HTTP API
//! - Categorization of transport errors into a short human-readable cause
//!
//! The analyzer treats every fetch or parse problem as one failure kind; the
//! variants here only exist to give that failure a useful description.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchError, InitializationError, RequestFailure, ServerError};
