//! Social preview rendering.
//!
//! Plain newline-joined text. No truncation is applied even though the real
//! surfaces cut titles and descriptions off.

use super::types::{MetaTags, PreviewData};

fn lines(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .map(|part| part.unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the three previews. Absent values render as empty lines.
pub fn render_previews(url: &str, meta: &MetaTags) -> PreviewData {
    PreviewData {
        google_preview: lines(&[meta.title.as_deref(), Some(url), meta.description.as_deref()]),
        facebook_preview: lines(&[meta.og_title.as_deref(), meta.og_description.as_deref()]),
        twitter_preview: lines(&[
            meta.twitter_title.as_deref(),
            meta.twitter_description.as_deref(),
        ]),
    }
}
