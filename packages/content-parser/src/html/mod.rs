//! HTML loading and the narrow tree interface used by the parser.
//!
//! The walker and splitter only ever see [`HtmlNode`] and [`HtmlChild`];
//! the underlying tree builder (`scraper`/html5ever) stays behind this
//! module.

mod utils;

pub use utils::{
    comment_text, find_first, first_heading, first_input, input_kind, is_blank_paragraph,
    is_blank_text, is_comment_annotation, is_list, InputKind,
};

use scraper::{ElementRef, Html, Node, Selector};
use std::fmt;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid selector"));

/// A loaded HTML document.
///
/// Loading never fails: malformed or partial markup is recovered the way a
/// browser would.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Load a full HTML document (fragments get an implied `<html><body>`).
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            html: Html::parse_document(input),
        }
    }

    /// The `<body>` element, if the tree has one.
    #[must_use]
    pub fn body(&self) -> Option<HtmlNode<'_>> {
        self.html.select(&BODY_SELECTOR).next().map(HtmlNode::new)
    }

    /// Parse errors the tree builder recovered from.
    #[must_use]
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("recovered_errors", &self.recovered_errors())
            .finish()
    }
}

/// A direct child of an element: either an element or a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlChild<'a> {
    /// Element child.
    Element(HtmlNode<'a>),
    /// Text child.
    Text(&'a str),
}

/// Element handle inside a loaded [`HtmlDocument`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlNode<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lowercase tag name (e.g. "p", "li").
    #[must_use]
    pub fn tag_name(self) -> &'a str {
        self.element.value().name()
    }

    /// Check if the element has a specific tag name.
    #[must_use]
    pub fn has_tag(self, tag: &str) -> bool {
        self.tag_name() == tag
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Check if the element carries an attribute, whatever its value.
    #[must_use]
    pub fn has_attribute(self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// All attributes as `(name, value)` pairs.
    pub fn attributes(self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.element.value().attrs()
    }

    /// Parent element, if the parent is an element.
    #[must_use]
    pub fn parent_element(self) -> Option<HtmlNode<'a>> {
        self.element.parent().and_then(ElementRef::wrap).map(Self::new)
    }

    /// Direct children in document order, comments and other node kinds excluded.
    pub fn children(self) -> impl Iterator<Item = HtmlChild<'a>> {
        self.element.children().filter_map(|child| match child.value() {
            Node::Element(_) => ElementRef::wrap(child).map(|e| HtmlChild::Element(Self::new(e))),
            Node::Text(text) => Some(HtmlChild::Text(&**text)),
            _ => None,
        })
    }

    /// Direct element children in document order.
    pub fn element_children(self) -> impl Iterator<Item = HtmlNode<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Self::new)
    }

    /// Full text content of the subtree, untrimmed.
    #[must_use]
    pub fn text(self) -> String {
        self.element.text().collect()
    }

    /// Text of the direct text children only.
    #[must_use]
    pub fn direct_text(self) -> String {
        self.children()
            .filter_map(|child| match child {
                HtmlChild::Text(text) => Some(text),
                HtmlChild::Element(_) => None,
            })
            .collect()
    }

    /// Check whether the element matches a selector.
    #[must_use]
    pub fn matches(self, selector: &Selector) -> bool {
        selector.matches(&self.element)
    }

    /// Descendants matching `selector`, in document order.
    #[must_use]
    pub fn select_all(self, selector: &Selector) -> Vec<HtmlNode<'a>> {
        self.element.select(selector).map(Self::new).collect()
    }
}

impl fmt::Debug for HtmlNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlNode")
            .field("tag", &self.tag_name())
            .finish()
    }
}
