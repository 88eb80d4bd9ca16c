//! Document query capability.
//!
//! The analyzer never touches the HTML parser directly. It asks a
//! [`PageDocument`] for its head and runs a handful of lookups against it:
//! - the first `<title>`
//! - `<meta>` by `name` or by `property`
//! - `<link>` by `rel`
//! - `<script>` by `type`
//!
//! [`HtmlDocument`] answers these with the `scraper` crate. Tests answer them
//! from an in-memory tag table instead.

mod html;
#[cfg(test)]
pub(crate) mod tag_table;

pub use html::HtmlDocument;

/// A lookup the analyzer can run against the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadSelector<'a> {
    /// `title`
    Title,
    /// `meta[name="..." i]`, value compared ASCII case-insensitively
    MetaName(&'a str),
    /// `meta[property="..." i]`, value compared ASCII case-insensitively
    MetaProperty(&'a str),
    /// `link[rel="..."]`
    LinkRel(&'a str),
    /// `script[type="..."]`
    ScriptType(&'a str),
}

impl HeadSelector<'_> {
    /// Renders the lookup as a CSS selector.
    pub fn to_css(&self) -> String {
        match self {
            HeadSelector::Title => "title".to_string(),
            HeadSelector::MetaName(value) => {
                format!("meta[name=\"{}\" i]", escape_css_string(value))
            }
            HeadSelector::MetaProperty(value) => {
                format!("meta[property=\"{}\" i]", escape_css_string(value))
            }
            HeadSelector::LinkRel(value) => format!("link[rel=\"{}\"]", escape_css_string(value)),
            HeadSelector::ScriptType(value) => {
                format!("script[type=\"{}\"]", escape_css_string(value))
            }
        }
    }
}

fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// An element found by a [`HeadQuery`].
pub trait QueryNode {
    /// Value of the attribute, or an empty string when the element lacks it.
    fn attr(&self, name: &str) -> String;

    /// Text content with runs of whitespace collapsed and the ends trimmed.
    fn text(&self) -> String;

    /// Raw inner content of the element.
    fn inner_html(&self) -> String;
}

/// Lookups scoped to the document head.
pub trait HeadQuery {
    /// First element in the head matching `selector`, in document order.
    fn select_first(&self, selector: HeadSelector<'_>) -> Option<Box<dyn QueryNode + '_>>;
}

/// A parsed page.
pub trait PageDocument {
    /// The document head, or `None` when the document has none.
    fn head(&self) -> Option<Box<dyn HeadQuery + '_>>;
}
