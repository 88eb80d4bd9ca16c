//! Response body reading with a size cap, and charset decoding.

use encoding_rs::{Encoding, UTF_8};
use log::debug;

/// Reads the response body chunk by chunk, stopping at `limit` bytes.
///
/// Bytes past the limit are discarded rather than treated as an error, so an
/// oversized page is still analyzed from its beginning (where the head lives).
pub(crate) async fn read_capped(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = limit.saturating_sub(body.len());
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            if chunk.len() > remaining {
                debug!(
                    "Response body from {} exceeds {} bytes; truncating",
                    response.url(),
                    limit
                );
            }
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// The `charset` parameter of a `Content-Type` value, unquoted.
pub(crate) fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
            .filter(|label| !label.is_empty())
    })
}

/// Decodes a body with the labelled charset, falling back to UTF-8.
///
/// A byte order mark overrides the label. Malformed sequences become U+FFFD.
pub(crate) fn decode_body(bytes: &[u8], charset: Option<&str>) -> String {
    let encoding = charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("Body is not valid {}; replaced malformed sequences", used.name());
    }
    text.into_owned()
}
