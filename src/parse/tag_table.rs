//! In-memory stand-in for a parsed document.
//!
//! Holds the head as a flat list of tags and answers lookups by walking it in
//! order, so analyzer tests need neither HTML nor a network.

use super::{HeadQuery, HeadSelector, PageDocument, QueryNode};

/// One tag in the table.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub content: String,
}

impl Tag {
    pub(crate) fn title(text: &str) -> Self {
        Tag {
            name: "title".to_string(),
            content: text.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn meta_name(name: &str, content: &str) -> Self {
        Tag::element("meta", &[("name", name), ("content", content)])
    }

    pub(crate) fn meta_property(property: &str, content: &str) -> Self {
        Tag::element("meta", &[("property", property), ("content", content)])
    }

    pub(crate) fn link(rel: &str, href: &str) -> Self {
        Tag::element("link", &[("rel", rel), ("href", href)])
    }

    pub(crate) fn script(script_type: &str, body: &str) -> Self {
        Tag {
            content: body.to_string(),
            ..Tag::element("script", &[("type", script_type)])
        }
    }

    pub(crate) fn element(name: &str, attrs: &[(&str, &str)]) -> Self {
        Tag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            content: String::new(),
        }
    }

    fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, selector: HeadSelector<'_>) -> bool {
        let (tag, attr, value) = match selector {
            HeadSelector::Title => return self.name == "title",
            HeadSelector::MetaName(v) => ("meta", "name", v),
            HeadSelector::MetaProperty(v) => ("meta", "property", v),
            HeadSelector::LinkRel(v) => ("link", "rel", v),
            HeadSelector::ScriptType(v) => ("script", "type", v),
        };
        // Same as the HTML matcher: these values compare ASCII case-insensitively
        self.name == tag
            && self
                .attr_value(attr)
                .is_some_and(|v| v.eq_ignore_ascii_case(value))
    }
}

/// A document whose head is a list of tags, or which has no head at all.
#[derive(Debug, Clone, Default)]
pub(crate) struct TagTable {
    head: Option<Vec<Tag>>,
}

impl TagTable {
    pub(crate) fn with_head(tags: Vec<Tag>) -> Self {
        TagTable { head: Some(tags) }
    }

    pub(crate) fn headless() -> Self {
        TagTable { head: None }
    }
}

impl PageDocument for TagTable {
    fn head(&self) -> Option<Box<dyn HeadQuery + '_>> {
        self.head
            .as_ref()
            .map(|tags| Box::new(TableHead { tags }) as Box<dyn HeadQuery + '_>)
    }
}

struct TableHead<'a> {
    tags: &'a [Tag],
}

impl HeadQuery for TableHead<'_> {
    fn select_first(&self, selector: HeadSelector<'_>) -> Option<Box<dyn QueryNode + '_>> {
        self.tags
            .iter()
            .find(|tag| tag.matches(selector))
            .map(|tag| Box::new(TableNode { tag }) as Box<dyn QueryNode + '_>)
    }
}

struct TableNode<'a> {
    tag: &'a Tag,
}

impl QueryNode for TableNode<'_> {
    fn attr(&self, name: &str) -> String {
        self.tag.attr_value(name).unwrap_or_default().to_string()
    }

    fn text(&self) -> String {
        self.tag.content.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn inner_html(&self) -> String {
        self.tag.content.clone()
    }
}
