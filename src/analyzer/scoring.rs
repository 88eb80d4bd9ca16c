//! Scoring rubric.
//!
//! Each check is a pure function of already-extracted metadata returning the
//! points it earns and one feedback item. The "full marks" thresholds for Open
//! Graph and Twitter Card are fixed literals, not sums of the per-tag weights.

use super::types::{FeedbackItem, FeedbackKind, MetaTags, ScoreBreakdown};

pub const TITLE_POINTS: u32 = 15;
pub const DESCRIPTION_POINTS: u32 = 15;
pub const CANONICAL_POINTS: u32 = 10;
pub const ROBOTS_POINTS: u32 = 5;

pub const OG_TITLE_POINTS: u32 = 10;
pub const OG_DESCRIPTION_POINTS: u32 = 10;
pub const OG_IMAGE_POINTS: u32 = 5;
pub const OPEN_GRAPH_FULL: u32 = 25;

pub const TWITTER_TITLE_POINTS: u32 = 8;
pub const TWITTER_DESCRIPTION_POINTS: u32 = 7;
pub const TWITTER_IMAGE_POINTS: u32 = 5;
pub const TWITTER_CARD_FULL: u32 = 20;

pub const STRUCTURED_DATA_POINTS: u32 = 10;

/// Outcome of one rubric check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub points: u32,
    pub feedback: FeedbackItem,
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// All-or-nothing check for a single field.
fn presence_check(
    value: Option<&str>,
    points: u32,
    present: &str,
    absent_kind: FeedbackKind,
    absent_message: &str,
) -> Check {
    if is_present(value) {
        Check {
            points,
            feedback: FeedbackItem::good(present),
        }
    } else {
        Check {
            points: 0,
            feedback: FeedbackItem {
                kind: absent_kind,
                message: absent_message.to_string(),
            },
        }
    }
}

/// Sums the weights of the fields that are present.
fn tally(fields: &[(Option<&str>, u32)]) -> u32 {
    fields
        .iter()
        .filter(|(value, _)| is_present(*value))
        .map(|(_, points)| points)
        .sum()
}

/// Full, partial or missing feedback for a group of tags.
fn group_feedback(points: u32, full: u32, label: &str) -> FeedbackItem {
    if points == full {
        FeedbackItem::good(format!("{}: {}/{}", label, points, full))
    } else if points > 0 {
        FeedbackItem::warning(format!("{}: {}/{}", label, points, full))
    } else {
        FeedbackItem::missing(format!("{} are missing", label))
    }
}

pub fn check_title(title: Option<&str>) -> Check {
    presence_check(
        title,
        TITLE_POINTS,
        "Title tag is present",
        FeedbackKind::Missing,
        "Title tag is missing",
    )
}

pub fn check_description(description: Option<&str>) -> Check {
    presence_check(
        description,
        DESCRIPTION_POINTS,
        "Description meta tag is present",
        FeedbackKind::Warning,
        "Description meta tag is missing",
    )
}

pub fn check_canonical(canonical: Option<&str>) -> Check {
    presence_check(
        canonical,
        CANONICAL_POINTS,
        "Canonical tag is present",
        FeedbackKind::Warning,
        "Canonical tag is missing",
    )
}

pub fn check_robots(robots: Option<&str>) -> Check {
    presence_check(
        robots,
        ROBOTS_POINTS,
        "Robots meta tag is present",
        FeedbackKind::Warning,
        "Robots meta tag is missing",
    )
}

pub fn check_open_graph(meta: &MetaTags) -> Check {
    let points = tally(&[
        (meta.og_title.as_deref(), OG_TITLE_POINTS),
        (meta.og_description.as_deref(), OG_DESCRIPTION_POINTS),
        (meta.og_image.as_deref(), OG_IMAGE_POINTS),
    ]);
    Check {
        points,
        feedback: group_feedback(points, OPEN_GRAPH_FULL, "Open Graph tags"),
    }
}

pub fn check_twitter_card(meta: &MetaTags) -> Check {
    let points = tally(&[
        (meta.twitter_title.as_deref(), TWITTER_TITLE_POINTS),
        (meta.twitter_description.as_deref(), TWITTER_DESCRIPTION_POINTS),
        (meta.twitter_image.as_deref(), TWITTER_IMAGE_POINTS),
    ]);
    Check {
        points,
        feedback: group_feedback(points, TWITTER_CARD_FULL, "Twitter Card tags"),
    }
}

/// Presence of a JSON-LD script is enough; its content is not inspected, so an
/// empty script still counts.
pub fn check_structured_data(structured_data: Option<&str>) -> Check {
    if structured_data.is_some() {
        Check {
            points: STRUCTURED_DATA_POINTS,
            feedback: FeedbackItem::good("Structured data (JSON-LD) is present"),
        }
    } else {
        Check {
            points: 0,
            feedback: FeedbackItem::warning("Structured data (JSON-LD) is missing"),
        }
    }
}

/// Runs every check in rubric order.
pub fn score(meta: &MetaTags) -> (ScoreBreakdown, Vec<FeedbackItem>) {
    let title = check_title(meta.title.as_deref());
    let description = check_description(meta.description.as_deref());
    let canonical = check_canonical(meta.canonical.as_deref());
    let robots = check_robots(meta.robots.as_deref());
    let open_graph = check_open_graph(meta);
    let twitter_card = check_twitter_card(meta);
    let structured_data = check_structured_data(meta.structured_data.as_deref());

    let breakdown = ScoreBreakdown {
        title_description: title.points + description.points,
        open_graph: open_graph.points,
        twitter_card: twitter_card.points,
        canonical_robots: canonical.points + robots.points,
        structured_data: structured_data.points,
    };

    let feedback = vec![
        title.feedback,
        description.feedback,
        canonical.feedback,
        robots.feedback,
        open_graph.feedback,
        twitter_card.feedback,
        structured_data.feedback,
    ];

    (breakdown, feedback)
}
