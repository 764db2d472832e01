//! Helpers for classifying and querying HTML elements.

use scraper::Selector;
use std::sync::LazyLock;

use super::HtmlNode;
use crate::config::COMMENT_SELECTOR;

#[allow(clippy::expect_used)] // Static selectors that are guaranteed to be valid
static COMMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COMMENT_SELECTOR).expect("valid selector"));

#[allow(clippy::expect_used)]
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector"));

#[allow(clippy::expect_used)]
static INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("valid selector"));

/// Kind of form input recognized by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text, email or number input.
    Text,
    /// Checkbox input.
    Checkbox,
    /// Radio input.
    Radio,
}

/// Classify an `<input>` element.
///
/// A missing `type` counts as text, as in HTML. Returns `None` for
/// non-input elements and for input types the parser does not model
/// (password, date, hidden, ...).
pub fn input_kind(node: HtmlNode<'_>) -> Option<InputKind> {
    if !node.has_tag("input") {
        return None;
    }
    let input_type = node
        .attribute("type")
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_else(|| "text".to_string());

    match input_type.as_str() {
        "text" | "email" | "number" => Some(InputKind::Text),
        "checkbox" => Some(InputKind::Checkbox),
        "radio" => Some(InputKind::Radio),
        _ => None,
    }
}

/// Check if text is empty or made of non-breaking spaces only.
///
/// Ordinary spaces are content: a paragraph holding `" "` is kept.
///
/// # Examples
/// ```
/// use sopwise_content_parser::html::is_blank_text;
///
/// assert!(is_blank_text(""));
/// assert!(is_blank_text("\u{a0}"));
/// assert!(!is_blank_text("\u{a0}x"));
/// assert!(!is_blank_text(" "));
/// ```
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(|c| c == '\u{a0}')
}

/// Check if a node is a paragraph without text, or with only a
/// non-breaking space.
///
/// Only the text counts: `<p><br></p>` and `<p><img></p>` are blank too.
/// Comment annotations count as the text they wrap.
pub fn is_blank_paragraph(node: HtmlNode<'_>) -> bool {
    node.has_tag("p") && is_blank_text(&node.text())
}

/// Check if a node is an ordered or unordered list.
pub fn is_list(node: HtmlNode<'_>) -> bool {
    node.has_tag("ul") || node.has_tag("ol")
}

/// Check if a node is an inline comment annotation.
pub fn is_comment_annotation(node: HtmlNode<'_>) -> bool {
    node.matches(&COMMENT)
}

/// Text a comment annotation is flattened to.
pub fn comment_text(node: HtmlNode<'_>) -> String {
    node.text()
}

/// First descendant matching a selector.
pub fn find_first<'a>(node: HtmlNode<'a>, selector: &Selector) -> Option<HtmlNode<'a>> {
    node.select_all(selector).into_iter().next()
}

/// First heading (`h1`-`h6`) under a node.
pub fn first_heading(node: HtmlNode<'_>) -> Option<HtmlNode<'_>> {
    find_first(node, &HEADING)
}

/// First input of the given kind under a node, or the node itself.
pub fn first_input(node: HtmlNode<'_>, kind: InputKind) -> Option<HtmlNode<'_>> {
    if input_kind(node) == Some(kind) {
        return Some(node);
    }
    node.select_all(&INPUT)
        .into_iter()
        .find(|input| input_kind(*input) == Some(kind))
}
