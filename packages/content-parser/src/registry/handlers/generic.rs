//! Generic fallback for elements without a dedicated parser.

use std::collections::BTreeMap;

use crate::config::{DEFAULT_TAG, IDENTITY_ATTRIBUTE};
use crate::html::{is_blank_paragraph, HtmlNode};
use crate::types::{generate_pk, BaseComponent, ComponentKind};

/// Build an `HtmlContent` component for an arbitrary element.
///
/// Copies every attribute except `id` and keeps the element's direct text
/// as `content`. Blank paragraphs yield `None` so they vanish from the tree.
pub fn html_content(node: HtmlNode<'_>) -> Option<BaseComponent> {
    if is_blank_paragraph(node) {
        return None;
    }

    let tag = match node.tag_name() {
        "" => DEFAULT_TAG,
        tag => tag,
    };

    let attributes: BTreeMap<String, String> = node
        .attributes()
        .filter(|(name, _)| *name != IDENTITY_ATTRIBUTE)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Some(BaseComponent::new(
        generate_pk(""),
        ComponentKind::HtmlContent {
            tag: tag.to_string(),
            content: node.direct_text(),
            attributes,
        },
    ))
}
