//! Parse engine that walks the HTML tree and builds components.

use super::core::ComponentRegistry;
use super::handlers::{checkbox_field, html_content, input_field, radio_button, text_area};
use crate::config::{MARKER_ATTRIBUTE, MAX_NESTING_DEPTH};
use crate::html::{comment_text, input_kind, is_comment_annotation, HtmlChild, HtmlNode, InputKind};
use crate::types::{BaseComponent, ComponentKind};

/// Engine that converts one element and its subtree into one component.
///
/// Dispatch order for an element:
/// 1. checkbox, radio or text-like `<input>`: a field built from the parent
///    (the element wrapping label and input)
/// 2. `<textarea>`: a text area from its own attributes
/// 3. registered `data-id` marker: the registered parser
/// 4. anything else: a generic HTML component
///
/// Children are then walked in order. Consecutive text runs (and inline
/// comment annotations, which are flattened to text) are merged into one
/// synthetic text node. Below [`MAX_NESTING_DEPTH`] levels, nested elements
/// are flattened into that text as well.
#[derive(Debug)]
pub struct ParseEngine {
    registry: ComponentRegistry,
}

impl ParseEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Get a mutable reference to the underlying registry.
    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// Parse an element tree recursively.
    ///
    /// # Returns
    /// The component for `node`, or `None` if the element is dropped
    /// (blank paragraphs, or a registered parser declining the element).
    pub fn parse_node(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        self.parse_at(node, 0)
    }

    fn parse_at(&self, node: HtmlNode<'_>, depth: usize) -> Option<BaseComponent> {
        let Some(mut component) = self.dispatch(node) else {
            tracing::trace!(tag = %node.tag_name(), "Dropped element");
            return None;
        };

        let children = self.parse_children(node, depth);
        if !children.is_empty() {
            // Text lives in the children only
            if let ComponentKind::HtmlContent { content, .. } = &mut component.kind {
                content.clear();
            }
            component.children = children;
        }

        Some(component)
    }

    fn dispatch(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        if let Some(kind) = input_kind(node) {
            let container = node.parent_element().unwrap_or(node);
            tracing::trace!(?kind, container = %container.tag_name(), "Field from input");
            return Some(match kind {
                InputKind::Checkbox => checkbox_field(container),
                InputKind::Radio => radio_button(container),
                InputKind::Text => input_field(container),
            });
        }

        if node.has_tag("textarea") {
            return Some(text_area(node));
        }

        if let Some(parser) = self.registry.get_parser(node) {
            tracing::trace!(
                marker = node.attribute(MARKER_ATTRIBUTE).unwrap_or_default(),
                "Registered parser"
            );
            return parser.parse(node);
        }

        html_content(node)
    }

    fn parse_children(&self, node: HtmlNode<'_>, depth: usize) -> Vec<BaseComponent> {
        let mut children = Vec::new();
        let mut text = String::new();
        let flatten = depth >= MAX_NESTING_DEPTH;
        if flatten {
            tracing::debug!(tag = %node.tag_name(), depth, "Nesting too deep, flattening subtree");
        }

        for child in node.children() {
            match child {
                HtmlChild::Text(run) => text.push_str(run),
                HtmlChild::Element(element) if is_comment_annotation(element) => {
                    text.push_str(&comment_text(element));
                }
                HtmlChild::Element(element) if flatten => text.push_str(&element.text()),
                HtmlChild::Element(element) => {
                    flush_text(&mut text, &mut children);
                    if let Some(component) = self.parse_at(element, depth + 1) {
                        children.push(component);
                    }
                }
            }
        }
        flush_text(&mut text, &mut children);

        children
    }
}

/// Emit buffered text as a synthetic text node.
fn flush_text(text: &mut String, children: &mut Vec<BaseComponent>) {
    if !text.is_empty() {
        children.push(BaseComponent::text(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;
    use crate::registry::create_default_registry;
    use crate::types::generate_pk;
    use pretty_assertions::assert_eq;

    fn engine() -> ParseEngine {
        ParseEngine::new(create_default_registry())
    }

    fn parse_first(engine: &ParseEngine, html: &str) -> Option<BaseComponent> {
        let doc = HtmlDocument::parse(html);
        let node = doc.body().unwrap().element_children().next().unwrap();
        engine.parse_node(node)
    }

    /// Tag (or type for non-HTML components) of each child.
    fn child_shapes(component: &BaseComponent) -> Vec<String> {
        component
            .children
            .iter()
            .map(|c| c.tag().unwrap_or(c.type_name()).to_string())
            .collect()
    }

    #[test]
    fn test_paragraph_text_moves_into_child() {
        let component = parse_first(&engine(), "<p>Hello</p>").unwrap();

        assert_eq!(component.tag(), Some("p"));
        let ComponentKind::HtmlContent { content, .. } = &component.kind else {
            unreachable!("expected html content");
        };
        assert_eq!(content, "");
        assert_eq!(child_shapes(&component), vec!["text"]);
        assert_eq!(component.children[0].text_content(), "Hello");
    }

    #[test]
    fn test_mixed_children_order() {
        let component = parse_first(&engine(), "<p>one <b>two</b> three</p>").unwrap();

        assert_eq!(child_shapes(&component), vec!["text", "b", "text"]);
        assert_eq!(component.text_content(), "one two three");
    }

    #[test]
    fn test_comment_annotation_flattened_into_text_run() {
        let component = parse_first(
            &engine(),
            r#"<p>Keep <span id="comment">reviewed</span> samples cold</p>"#,
        )
        .unwrap();

        assert_eq!(child_shapes(&component), vec!["text"]);
        assert_eq!(component.children[0].text_content(), "Keep reviewed samples cold");
    }

    #[test]
    fn test_checkbox_from_parent() {
        let component =
            parse_first(&engine(), r#"<label>Agree<input type="checkbox" checked></label>"#)
                .unwrap();

        assert_eq!(component.tag(), Some("label"));
        assert_eq!(child_shapes(&component), vec!["text", "checkbox"]);
        assert_eq!(
            component.children[1].kind,
            ComponentKind::CheckboxField {
                label: "Agree".to_string(),
                checked: true,
            }
        );
    }

    #[test]
    fn test_radio_and_text_inputs_from_parent() {
        let component = parse_first(
            &engine(),
            r#"<div><span>Mode<input type="radio" name="mode"></span><span>Lot<input type="number" placeholder="0"></span></div>"#,
        )
        .unwrap();

        let kinds: Vec<_> = component
            .descendants()
            .map(BaseComponent::type_name)
            .filter(|t| *t != "html")
            .collect();
        assert_eq!(kinds, vec!["radio-button", "input-field"]);
    }

    #[test]
    fn test_unmodelled_input_is_generic() {
        let component =
            parse_first(&engine(), r#"<div><input type="password" name="pw"></div>"#).unwrap();
        assert_eq!(child_shapes(&component), vec!["input"]);
    }

    #[test]
    fn test_textarea_keeps_default_text_as_child() {
        let component =
            parse_first(&engine(), r#"<textarea rows="3">draft</textarea>"#).unwrap();

        assert_eq!(component.type_name(), "text-area");
        assert_eq!(child_shapes(&component), vec!["text"]);
    }

    #[test]
    fn test_registered_marker_dispatch() {
        let component = parse_first(
            &engine(),
            r#"<div data-id="title-section"><h1>Intro</h1><p>Overview</p></div>"#,
        )
        .unwrap();

        assert_eq!(
            component.kind,
            ComponentKind::TitleSection {
                title: "Intro".to_string(),
                subtitle: "Overview".to_string(),
            }
        );
        assert_eq!(child_shapes(&component), vec!["h1", "p"]);
    }

    #[test]
    fn test_custom_parser_and_drop() {
        fn banner(node: HtmlNode<'_>) -> Option<BaseComponent> {
            Some(BaseComponent::new(
                generate_pk("_banner"),
                ComponentKind::HtmlContent {
                    tag: "banner".to_string(),
                    content: node.text(),
                    attributes: Default::default(),
                },
            ))
        }
        fn hidden(_node: HtmlNode<'_>) -> Option<BaseComponent> {
            None
        }

        let mut engine = engine();
        engine.registry_mut().register("banner", banner);
        engine.registry_mut().register("hidden", hidden);

        let component = parse_first(
            &engine,
            r#"<div><aside data-id="banner">Warning</aside><div data-id="hidden">x</div></div>"#,
        )
        .unwrap();

        assert_eq!(child_shapes(&component), vec!["banner"]);
        assert!(component.children[0].pk.ends_with("_banner"));
    }

    #[test]
    fn test_blank_paragraph_child_dropped() {
        let component = parse_first(
            &engine(),
            "<div><p>&nbsp;</p><p><br></p><p>kept</p><p><br></p></div>",
        )
        .unwrap();
        assert_eq!(child_shapes(&component), vec!["p"]);
        assert_eq!(component.text_content(), "kept");
    }

    #[test]
    fn test_no_duplicated_content() {
        let component = parse_first(
            &engine(),
            "<section>Intro<div>Nested <em>deep</em></div><ul><li>a</li></ul>tail</section>",
        )
        .unwrap();

        for node in component.descendants() {
            if let ComponentKind::HtmlContent { content, .. } = &node.kind {
                if !node.children.is_empty() {
                    assert_eq!(content, "", "content duplicated on <{:?}>", node.tag());
                }
            }
        }
        assert_eq!(component.text_content(), "IntroNested deepatail");
    }

    #[test]
    fn test_deep_nesting_is_flattened() {
        let levels = 20_000;
        let html = format!("{}deep{}", "<div>".repeat(levels), "</div>".repeat(levels));
        let component = parse_first(&engine(), &html).unwrap();

        let mut depth = 0;
        let mut current = &component;
        while let Some(child) = current.children.first() {
            depth += 1;
            current = child;
        }
        assert_eq!(depth, MAX_NESTING_DEPTH + 1);
        assert!(current.is_text_run());
        assert_eq!(component.text_content(), "deep");
    }

    #[test]
    fn test_flattening_keeps_text_order() {
        let levels = MAX_NESTING_DEPTH + 1;
        let html = format!(
            "{}a<b>b</b><i>c</i>d{}",
            "<div>".repeat(levels),
            "</div>".repeat(levels)
        );
        let component = parse_first(&engine(), &html).unwrap();

        assert_eq!(component.text_content(), "abcd");
        let leaf_parent = component
            .descendants()
            .find(|c| c.children.iter().any(BaseComponent::is_text_run))
            .unwrap();
        assert_eq!(child_shapes(leaf_parent), vec!["text"]);
    }

    #[test]
    fn test_unique_pks() {
        let component = parse_first(&engine(), "<div><p>a</p><p>b<i>c</i></p></div>").unwrap();
        let mut pks: Vec<_> = component.descendants().map(|c| c.pk.clone()).collect();
        let total = pks.len();
        pks.sort();
        pks.dedup();
        assert_eq!(pks.len(), total);
        assert!(pks.iter().all(|pk| !pk.is_empty()));
    }
}
