//! Section title parsers.

use scraper::Selector;
use std::sync::LazyLock;

use crate::html::{find_first, first_heading, HtmlNode};
use crate::registry::handler::ComponentParser;
use crate::types::{BaseComponent, TitleSection, PROCEDURE_PK_SUFFIX, TITLE_PK_SUFFIX};

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));

/// Build a section title from a title-section marker element.
///
/// The first heading gives the title and the first paragraph the subtitle;
/// either may be missing, in which case it is empty.
pub fn title_section(node: HtmlNode<'_>) -> TitleSection {
    let title = first_heading(node)
        .map(|h| h.text().trim().to_string())
        .unwrap_or_default();
    let subtitle = find_first(node, &PARAGRAPH)
        .map(|p| p.text().trim().to_string())
        .unwrap_or_default();

    TitleSection::new(title, subtitle, TITLE_PK_SUFFIX)
}

/// Build the auto-generated title of a procedure step.
///
/// # Examples
/// ```
/// use sopwise_content_parser::registry::handlers::procedure_step;
///
/// let step = procedure_step(2);
/// assert_eq!(step.title, "Step 2");
/// assert!(step.subtitle.is_empty());
/// ```
pub fn procedure_step(number: usize) -> TitleSection {
    TitleSection::new(format!("Step {number}"), "", PROCEDURE_PK_SUFFIX)
}

/// Parser for `data-id="title-section"` elements found below the top level.
pub struct TitleSectionParser;

impl ComponentParser for TitleSectionParser {
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        Some(title_section(node).into())
    }
}
