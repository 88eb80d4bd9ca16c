//! Analysis result data structures.
//!
//! These are the values serialized back to the browser client, so field names
//! follow its camelCase JSON.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Severity of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackKind {
    /// The check passed
    Good,
    /// Recommended metadata is absent or incomplete
    Warning,
    /// Essential metadata is absent, or the page could not be analyzed
    Missing,
}

/// One line of human-readable feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Severity (serialized as `type`, which is what the client reads)
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// Message shown to the user
    pub message: String,
}

impl FeedbackItem {
    /// A `good` item.
    pub fn good(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Good,
            message: message.into(),
        }
    }

    /// A `warning` item.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            message: message.into(),
        }
    }

    /// A `missing` item.
    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Missing,
            message: message.into(),
        }
    }
}

/// Points earned per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Title (15) and description (15)
    pub title_description: u32,
    /// Open Graph title, description and image (25)
    pub open_graph: u32,
    /// Twitter Card title, description and image (20)
    pub twitter_card: u32,
    /// Canonical link (10) and robots meta (5)
    pub canonical_robots: u32,
    /// JSON-LD structured data (10)
    pub structured_data: u32,
}

impl ScoreBreakdown {
    /// Sum of all categories.
    pub fn total(&self) -> u32 {
        self.title_description
            + self.open_graph
            + self.twitter_card
            + self.canonical_robots
            + self.structured_data
    }
}

/// Metadata extracted from the document head.
///
/// `None` means no matching tag was found. A tag with empty content is kept as
/// `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    /// Text of the first `<title>`
    pub title: Option<String>,
    /// `description` meta content
    pub description: Option<String>,
    /// `href` of `<link rel="canonical">`
    pub canonical: Option<String>,
    /// `og:title` meta content
    pub og_title: Option<String>,
    /// `og:description` meta content
    pub og_description: Option<String>,
    /// `og:image` meta content
    pub og_image: Option<String>,
    /// `twitter:title` meta content
    pub twitter_title: Option<String>,
    /// `twitter:description` meta content
    pub twitter_description: Option<String>,
    /// `twitter:image` meta content
    pub twitter_image: Option<String>,
    /// `robots` meta content
    pub robots: Option<String>,
    /// Raw inner content of the first JSON-LD script, unvalidated
    pub structured_data: Option<String>,
}

/// Plain-text social previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    /// Title, URL and description, one per line
    pub google_preview: String,
    /// Open Graph title and description, one per line
    pub facebook_preview: String,
    /// Twitter Card title and description, one per line
    pub twitter_preview: String,
}

/// Everything one analysis produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total score, 0 to 100; always equals `breakdown.total()`
    pub score: u32,
    /// Points per category
    pub breakdown: ScoreBreakdown,
    /// Extracted metadata
    pub meta: MetaTags,
    /// Feedback in evaluation order
    pub feedback: Vec<FeedbackItem>,
    /// Rendered previews
    pub previews: PreviewData,
}

impl AnalysisResult {
    /// Builds a result whose score is derived from the breakdown.
    pub fn new(
        breakdown: ScoreBreakdown,
        meta: MetaTags,
        feedback: Vec<FeedbackItem>,
        previews: PreviewData,
    ) -> Self {
        Self {
            score: breakdown.total(),
            breakdown,
            meta,
            feedback,
            previews,
        }
    }

    /// A zero-score result carrying a single feedback item and nothing else.
    pub fn only(item: FeedbackItem) -> Self {
        Self {
            feedback: vec![item],
            ..Default::default()
        }
    }
}
