//! CSS selector parsing.

use scraper::Selector;

/// Selector that matches no element.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a selector built at runtime.
///
/// A selector that does not parse is logged and replaced by one that matches
/// nothing, so the lookup reports "absent" instead of aborting the analysis.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    match Selector::parse(selector_str) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!(
                "Unparseable CSS selector '{}' in {}: {}",
                selector_str,
                context,
                e
            );
            parse_selector_unsafe(MATCH_NOTHING, "fallback")
        }
    }
}

/// Parses a selector that is a literal in this crate.
///
/// # Panics
///
/// Panics if `selector_str` is not valid CSS, which is a bug in the literal.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str)
        .unwrap_or_else(|e| panic!("Invalid static CSS selector '{selector_str}' ({context}): {e}"))
}
