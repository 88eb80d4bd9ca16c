//! Request headers.

/// Accept header sent with every page request.
pub(crate) const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Applies the standard request headers to a `reqwest::RequestBuilder`.
///
/// The User-Agent is set on the client itself, see `initialization::init_client`.
pub(crate) fn apply_to_request_builder(
    builder: reqwest::RequestBuilder,
) -> reqwest::RequestBuilder {
    builder
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
}
