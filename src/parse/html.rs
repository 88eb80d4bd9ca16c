//! `scraper`-backed implementation of the document query capability.

use scraper::{ElementRef, Html};
use std::sync::LazyLock;

use super::{HeadQuery, HeadSelector, PageDocument, QueryNode};

const HEAD_SELECTOR_STR: &str = "head";

static HEAD_SELECTOR: LazyLock<scraper::Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(HEAD_SELECTOR_STR, "HEAD_SELECTOR"));

/// A page parsed with `scraper`.
///
/// HTML5 parsing never fails; malformed markup is repaired the way browsers
/// repair it, which also means a `<head>` is synthesized for documents that omit it.
pub struct HtmlDocument {
    document: Html,
}

impl HtmlDocument {
    /// Parses raw HTML into a queryable document.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::debug!("HTML parser repaired {} error(s)", document.errors.len());
        }
        Self { document }
    }
}

impl PageDocument for HtmlDocument {
    fn head(&self) -> Option<Box<dyn HeadQuery + '_>> {
        self.document
            .select(&HEAD_SELECTOR)
            .next()
            .map(|element| Box::new(HtmlHead { element }) as Box<dyn HeadQuery + '_>)
    }
}

struct HtmlHead<'a> {
    element: ElementRef<'a>,
}

impl HeadQuery for HtmlHead<'_> {
    fn select_first(&self, selector: HeadSelector<'_>) -> Option<Box<dyn QueryNode + '_>> {
        let css = selector.to_css();
        let parsed = crate::utils::parse_selector_with_fallback(&css, "head lookup");
        self.element
            .select(&parsed)
            .next()
            .map(|element| Box::new(HtmlNode { element }) as Box<dyn QueryNode + '_>)
    }
}

struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl QueryNode for HtmlNode<'_> {
    fn attr(&self, name: &str) -> String {
        self.element
            .value()
            .attr(name)
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn text(&self) -> String {
        let raw: String = self.element.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn inner_html(&self) -> String {
        // Raw text elements hold a single unescaped text node; serializing them
        // would entity-escape `<` and `&` inside the script body.
        match self.element.value().name() {
            "script" | "style" => self.element.text().collect(),
            _ => self.element.inner_html(),
        }
    }
}
