//! Form field parsers.
//!
//! Fields are modelled as "label and input inside one wrapping element":
//! the builders take the wrapping container, read the label from its text
//! and the input attributes from the first matching input inside it.

use scraper::Selector;
use std::sync::LazyLock;

use crate::config::{parse_leading_int, DEFAULT_TEXT_AREA_COLS, DEFAULT_TEXT_AREA_ROWS};
use crate::html::{find_first, first_input, HtmlNode, InputKind};
use crate::registry::handler::ComponentParser;
use crate::types::{
    generate_pk, BaseComponent, ComponentKind, CHECKBOX_PK_SUFFIX, INPUT_PK_SUFFIX,
    RADIO_PK_SUFFIX,
};

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static TEXTAREA: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("textarea").expect("valid selector"));

fn label_of(container: HtmlNode<'_>) -> String {
    container.text().trim().to_string()
}

fn is_checked(input: Option<HtmlNode<'_>>) -> bool {
    input.is_some_and(|i| i.has_attribute("checked"))
}

/// Build an input field from the element wrapping a text-like input.
pub fn input_field(container: HtmlNode<'_>) -> BaseComponent {
    let placeholder = first_input(container, InputKind::Text)
        .and_then(|input| input.attribute("placeholder"))
        .unwrap_or_default();

    BaseComponent::new(
        generate_pk(INPUT_PK_SUFFIX),
        ComponentKind::InputField {
            label: label_of(container),
            placeholder: placeholder.to_string(),
        },
    )
}

/// Build a checkbox from the element wrapping a checkbox input.
pub fn checkbox_field(container: HtmlNode<'_>) -> BaseComponent {
    let input = first_input(container, InputKind::Checkbox);

    BaseComponent::new(
        generate_pk(CHECKBOX_PK_SUFFIX),
        ComponentKind::CheckboxField {
            label: label_of(container),
            checked: is_checked(input),
        },
    )
}

/// Build a radio button from the element wrapping a radio input.
pub fn radio_button(container: HtmlNode<'_>) -> BaseComponent {
    let input = first_input(container, InputKind::Radio);
    let name = input.and_then(|i| i.attribute("name")).unwrap_or_default();

    BaseComponent::new(
        generate_pk(RADIO_PK_SUFFIX),
        ComponentKind::RadioButton {
            label: label_of(container),
            name: name.to_string(),
            checked: is_checked(input),
        },
    )
}

/// Build a text area from a `<textarea>`, or from the first one inside a
/// marked container.
///
/// `rows` and `cols` fall back to 4 and 50 when missing or not numeric.
pub fn text_area(node: HtmlNode<'_>) -> BaseComponent {
    let source = if node.has_tag("textarea") {
        node
    } else {
        find_first(node, &TEXTAREA).unwrap_or(node)
    };

    let rows = source
        .attribute("rows")
        .and_then(parse_leading_int)
        .unwrap_or(DEFAULT_TEXT_AREA_ROWS);
    let cols = source
        .attribute("cols")
        .and_then(parse_leading_int)
        .unwrap_or(DEFAULT_TEXT_AREA_COLS);

    BaseComponent::new(
        generate_pk(""),
        ComponentKind::TextArea {
            placeholder: source.attribute("placeholder").unwrap_or_default().to_string(),
            rows,
            cols,
        },
    )
}

/// Parser for `data-id="input-field"` containers.
pub struct InputFieldParser;

impl ComponentParser for InputFieldParser {
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        Some(input_field(node))
    }
}

/// Parser for `data-id="checkbox"` containers.
pub struct CheckboxParser;

impl ComponentParser for CheckboxParser {
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        Some(checkbox_field(node))
    }
}

/// Parser for `data-id="radio-button"` containers.
pub struct RadioButtonParser;

impl ComponentParser for RadioButtonParser {
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        Some(radio_button(node))
    }
}

/// Parser for `data-id="text-area"` elements.
pub struct TextAreaParser;

impl ComponentParser for TextAreaParser {
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        Some(text_area(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    fn with_first_child<R>(html: &str, f: impl FnOnce(HtmlNode<'_>) -> R) -> R {
        let doc = HtmlDocument::parse(html);
        let node = doc.body().unwrap().element_children().next().unwrap();
        f(node)
    }

    #[test]
    fn test_input_field() {
        let component = with_first_child(
            r#"<div data-id="input-field"> Batch number <input type="text" placeholder="e.g. B-12"></div>"#,
            input_field,
        );
        assert!(component.pk.ends_with("_input"));
        assert_eq!(
            component.kind,
            ComponentKind::InputField {
                label: "Batch number".to_string(),
                placeholder: "e.g. B-12".to_string(),
            }
        );
    }

    #[test]
    fn test_input_field_email_placeholder() {
        let component = with_first_child(
            r#"<label>Contact<input type="email" placeholder="name@lab.org"></label>"#,
            input_field,
        );
        assert_eq!(
            component.kind,
            ComponentKind::InputField {
                label: "Contact".to_string(),
                placeholder: "name@lab.org".to_string(),
            }
        );
    }

    #[test]
    fn test_checkbox_checked() {
        let component = with_first_child(
            r#"<label>Agree<input type="checkbox" checked></label>"#,
            checkbox_field,
        );
        assert!(component.pk.ends_with("_checkbox"));
        assert_eq!(
            component.kind,
            ComponentKind::CheckboxField {
                label: "Agree".to_string(),
                checked: true,
            }
        );
    }

    #[test]
    fn test_checkbox_unchecked() {
        let component = with_first_child(
            r#"<label>Agree<input type="checkbox"></label>"#,
            checkbox_field,
        );
        assert_eq!(
            component.kind,
            ComponentKind::CheckboxField {
                label: "Agree".to_string(),
                checked: false,
            }
        );
    }

    #[test]
    fn test_radio_button() {
        let component = with_first_child(
            r#"<label>Sterile<input type="radio" name="state" checked="checked"></label>"#,
            radio_button,
        );
        assert!(component.pk.ends_with("_radio"));
        assert_eq!(
            component.kind,
            ComponentKind::RadioButton {
                label: "Sterile".to_string(),
                name: "state".to_string(),
                checked: true,
            }
        );
    }

    #[test]
    fn test_radio_button_without_input() {
        let component = with_first_child(r#"<div data-id="radio-button">Orphan</div>"#, radio_button);
        assert_eq!(
            component.kind,
            ComponentKind::RadioButton {
                label: "Orphan".to_string(),
                name: String::new(),
                checked: false,
            }
        );
    }

    #[test]
    fn test_text_area_attributes() {
        let component = with_first_child(
            r#"<textarea placeholder="Observations" rows="8" cols="60px"></textarea>"#,
            text_area,
        );
        assert_eq!(
            component.kind,
            ComponentKind::TextArea {
                placeholder: "Observations".to_string(),
                rows: 8,
                cols: 60,
            }
        );
    }

    #[test]
    fn test_text_area_defaults() {
        let component = with_first_child(r#"<textarea rows="many"></textarea>"#, text_area);
        assert_eq!(
            component.kind,
            ComponentKind::TextArea {
                placeholder: String::new(),
                rows: 4,
                cols: 50,
            }
        );
    }

    #[test]
    fn test_text_area_inside_marked_container() {
        let component = with_first_child(
            r#"<div data-id="text-area"><textarea placeholder="Notes" rows="2"></textarea></div>"#,
            text_area,
        );
        assert_eq!(
            component.kind,
            ComponentKind::TextArea {
                placeholder: "Notes".to_string(),
                rows: 2,
                cols: 50,
            }
        );
    }
}
