//! Error categorization.
//!
//! Maps a `reqwest::Error` onto a `RequestFailure` so the failure cause shown
//! to the user reads as "Request timed out" rather than a bare client error.

use super::types::RequestFailure;

/// Categorizes a `reqwest::Error` into a `RequestFailure`.
///
/// Timeouts are checked first because reqwest also flags a timed-out request as
/// a request error.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `RequestFailure`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequestFailure {
    if error.is_timeout() {
        RequestFailure::Timeout
    } else if error.is_redirect() {
        RequestFailure::Redirect
    } else if error.is_connect() {
        RequestFailure::Connect
    } else if error.is_body() {
        RequestFailure::Body
    } else if error.is_decode() {
        RequestFailure::Decode
    } else {
        RequestFailure::Request
    }
}
