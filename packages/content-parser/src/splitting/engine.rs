//! Section splitter that groups top-level body content into sections.

use super::types::SplitContext;
use crate::config::{StepNumbering, MARKER_ATTRIBUTE, PROCEDURE_STEP_MARKER, TITLE_SECTION_MARKER};
use crate::html::{is_blank_paragraph, is_list, HtmlNode};
use crate::registry::handlers::title_section;
use crate::registry::ParseEngine;
use crate::types::ContentSection;

/// Splitter driving the [`ParseEngine`] over the children of `<body>`.
///
/// Top-level rules, in order:
/// - blank paragraphs are skipped
/// - `<ul>`/`<ol>` are expanded into their `<li>` items; an item marked
///   `procedure-li` becomes its own "Step N" section
/// - a `title-section` marker closes the current section and opens a
///   titled one
/// - anything else is walked and appended to the current section
pub struct SectionSplitter<'e> {
    engine: &'e ParseEngine,
    numbering: StepNumbering,
}

impl<'e> SectionSplitter<'e> {
    /// Create a splitter over an engine.
    #[must_use]
    pub fn new(engine: &'e ParseEngine, numbering: StepNumbering) -> Self {
        Self { engine, numbering }
    }

    /// Split the children of `body` into ordered sections.
    ///
    /// Text directly under `<body>` is not part of any section.
    pub fn split(&self, body: HtmlNode<'_>) -> Vec<ContentSection> {
        let mut context = SplitContext::new(self.numbering);

        for node in body.element_children() {
            if is_blank_paragraph(node) {
                continue;
            }

            if is_list(node) {
                self.split_list(node, &mut context);
            } else if has_marker(node, TITLE_SECTION_MARKER) {
                context.start_titled(title_section(node));
            } else if let Some(component) = self.engine.parse_node(node) {
                context.push_component(component);
            }
        }

        context.finish()
    }

    fn split_list(&self, list: HtmlNode<'_>, context: &mut SplitContext) {
        for item in list.element_children().filter(|n| n.has_tag("li")) {
            let component = self.engine.parse_node(item);
            if has_marker(item, PROCEDURE_STEP_MARKER) {
                context.push_step(component);
            } else if let Some(component) = component {
                context.push_component(component);
            }
        }
    }
}

fn has_marker(node: HtmlNode<'_>, marker: &str) -> bool {
    node.attribute(MARKER_ATTRIBUTE) == Some(marker)
}
