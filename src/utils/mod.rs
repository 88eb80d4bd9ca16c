//! Small shared helpers.
//!
//! This module provides:
//! - String sanitization for failure causes echoed back to clients
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
