//! Default registry configuration for SOP content.

use super::core::ComponentRegistry;
use super::handlers::{
    CheckboxParser, InputFieldParser, RadioButtonParser, TextAreaParser, TitleSectionParser,
};
use crate::config::{
    CHECKBOX_MARKER, INPUT_FIELD_MARKER, RADIO_BUTTON_MARKER, TEXT_AREA_MARKER,
    TITLE_SECTION_MARKER,
};

/// Create a registry with the default SOP component parsers.
///
/// Covers title sections and the four form-field markers. Procedure steps
/// are not registered here; the section splitter handles them because they
/// open new sections rather than produce a component.
#[must_use]
pub fn create_default_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    registry.register(TITLE_SECTION_MARKER, TitleSectionParser);
    registry.register(INPUT_FIELD_MARKER, InputFieldParser);
    registry.register(CHECKBOX_MARKER, CheckboxParser);
    registry.register(RADIO_BUTTON_MARKER, RadioButtonParser);
    registry.register(TEXT_AREA_MARKER, TextAreaParser);

    registry
}
