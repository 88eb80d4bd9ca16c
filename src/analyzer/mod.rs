//! Metadata analysis.
//!
//! Fetch, parse, extract, score, preview:
//! 1. The page is fetched through a [`Fetcher`].
//! 2. The body is parsed into an [`HtmlDocument`].
//! 3. Head fields are extracted into [`MetaTags`].
//! 4. The rubric in `scoring` turns them into a breakdown and feedback.
//! 5. Previews are rendered from the same fields.
//!
//! A fetch failure short-circuits into a zero-score result carrying one
//! `missing` feedback item; nothing is ever returned as an error.

mod preview;
mod scoring;
mod types;

use log::{debug, info, warn};

use crate::fetch::{validate_url, Fetcher, HttpFetcher};
use crate::parse::{HeadQuery, HeadSelector, HtmlDocument, PageDocument};
use crate::utils::sanitize::sanitize_and_truncate_error_message;

pub use preview::render_previews;
pub use types::{AnalysisResult, FeedbackItem, FeedbackKind, MetaTags, PreviewData, ScoreBreakdown};

/// Feedback when the document has no head.
pub const HEAD_MISSING_MESSAGE: &str = "<head> section is missing";

/// Prefix of the feedback message for fetch and parse failures.
pub const FETCH_FAILURE_PREFIX: &str = "Failed to fetch or parse the URL: ";

const LD_JSON_TYPE: &str = "application/ld+json";

/// Analyzes pages fetched through `F`.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer<F = HttpFetcher> {
    fetcher: F,
}

impl<F: Fetcher> Analyzer<F> {
    /// Creates an analyzer around a fetcher.
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches and analyzes `url`.
    ///
    /// Never fails: fetch problems, including a blank URL, become a zero-score
    /// result with a single `missing` feedback item.
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        let fetched = match validate_url(url) {
            Ok(_) => self.fetcher.fetch(url).await,
            Err(e) => Err(e),
        };

        let raw = match fetched {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to fetch {:?}: {}", url, e);
                return fetch_failure(&e.to_string());
            }
        };

        debug!(
            "Fetched {} (status {}, {} bytes, final URL {})",
            url,
            raw.status,
            raw.body.len(),
            raw.final_url
        );
        let document = HtmlDocument::parse(&raw.body);
        let result = analyze_document(url, &document);
        info!("Analyzed {}: score {}/100", url, result.score);
        result
    }
}

/// The zero-score result for a fetch or parse failure.
pub fn fetch_failure(cause: &str) -> AnalysisResult {
    AnalysisResult::only(FeedbackItem::missing(format!(
        "{}{}",
        FETCH_FAILURE_PREFIX,
        sanitize_and_truncate_error_message(cause)
    )))
}

/// Scores an already parsed document. `url` only feeds the Google preview.
pub fn analyze_document(url: &str, document: &dyn PageDocument) -> AnalysisResult {
    let Some(head) = document.head() else {
        debug!("Document for {} has no head", url);
        return AnalysisResult::only(FeedbackItem::missing(HEAD_MISSING_MESSAGE));
    };

    let meta = extract_meta(head.as_ref());
    let (breakdown, feedback) = scoring::score(&meta);
    let previews = render_previews(url, &meta);
    AnalysisResult::new(breakdown, meta, feedback, previews)
}

/// Extracts every scored field from the head.
pub fn extract_meta(head: &dyn HeadQuery) -> MetaTags {
    let meta = MetaTags {
        title: head.select_first(HeadSelector::Title).map(|n| n.text()),
        description: meta_content(head, "description"),
        canonical: head
            .select_first(HeadSelector::LinkRel("canonical"))
            .map(|n| n.attr("href")),
        og_title: meta_content(head, "og:title"),
        og_description: meta_content(head, "og:description"),
        og_image: meta_content(head, "og:image"),
        twitter_title: meta_content(head, "twitter:title"),
        twitter_description: meta_content(head, "twitter:description"),
        twitter_image: meta_content(head, "twitter:image"),
        robots: meta_content(head, "robots"),
        structured_data: head
            .select_first(HeadSelector::ScriptType(LD_JSON_TYPE))
            .map(|n| n.inner_html()),
    };
    debug!("Extracted meta tags: {:?}", meta);
    meta
}

/// `content` of the first `<meta name=key>`, else of the first `<meta property=key>`.
pub fn meta_content(head: &dyn HeadQuery, key: &str) -> Option<String> {
    head.select_first(HeadSelector::MetaName(key))
        .or_else(|| head.select_first(HeadSelector::MetaProperty(key)))
        .map(|n| n.attr("content"))
}
