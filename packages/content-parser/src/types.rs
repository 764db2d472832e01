//! Core data types for parsed SOP content.
//!
//! A parse produces a [`Document`]: ordered [`ContentSection`]s, each with an
//! optional [`TitleSection`] and a tree of [`BaseComponent`]s. The model is
//! a plain value; serialized, it is the flow data the workflow layer stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::config::TEXT_NODE_TAG;

/// Suffix for title section identifiers.
pub const TITLE_PK_SUFFIX: &str = "_title";

/// Suffix for auto-generated procedure step titles.
pub const PROCEDURE_PK_SUFFIX: &str = "_procedure";

/// Suffix for input field identifiers.
pub const INPUT_PK_SUFFIX: &str = "_input";

/// Suffix for checkbox identifiers.
pub const CHECKBOX_PK_SUFFIX: &str = "_checkbox";

/// Suffix for radio button identifiers.
pub const RADIO_PK_SUFFIX: &str = "_radio";

/// Generate a fresh component identifier.
///
/// # Examples
/// ```
/// use sopwise_content_parser::types::generate_pk;
///
/// let pk = generate_pk("_input");
/// assert!(pk.ends_with("_input"));
/// assert_ne!(pk, generate_pk("_input"));
/// ```
#[must_use]
pub fn generate_pk(suffix: &str) -> String {
    format!("{}{suffix}", Uuid::new_v4())
}

/// Variant-specific data of a component, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentKind {
    /// Heading and paragraph pair marking a section.
    #[serde(rename = "title-section")]
    TitleSection { title: String, subtitle: String },

    /// Single-line text, email or number input with its label.
    #[serde(rename = "input-field")]
    InputField { label: String, placeholder: String },

    /// Checkbox with its label.
    #[serde(rename = "checkbox")]
    CheckboxField { label: String, checked: bool },

    /// Radio button with its label and group name.
    #[serde(rename = "radio-button")]
    RadioButton {
        label: String,
        name: String,
        checked: bool,
    },

    /// Multi-line text input.
    #[serde(rename = "text-area")]
    TextArea {
        placeholder: String,
        rows: u32,
        cols: u32,
    },

    /// Any other element, or a text run when `tag` is `"text"`.
    #[serde(rename = "html")]
    HtmlContent {
        tag: String,
        content: String,
        attributes: BTreeMap<String, String>,
    },
}

impl ComponentKind {
    /// The serialized `type` discriminant.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::TitleSection { .. } => "title-section",
            Self::InputField { .. } => "input-field",
            Self::CheckboxField { .. } => "checkbox",
            Self::RadioButton { .. } => "radio-button",
            Self::TextArea { .. } => "text-area",
            Self::HtmlContent { .. } => "html",
        }
    }
}

/// One node of the parsed component tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseComponent {
    /// Unique identifier generated at parse time.
    pub pk: String,

    /// Variant data, serialized inline with its `type` tag.
    #[serde(flatten)]
    pub kind: ComponentKind,

    /// Ordered child components.
    #[serde(default)]
    pub children: Vec<BaseComponent>,
}

impl BaseComponent {
    /// Create a childless component.
    #[must_use]
    pub fn new(pk: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            pk: pk.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a synthetic text-run node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(
            generate_pk(""),
            ComponentKind::HtmlContent {
                tag: TEXT_NODE_TAG.to_string(),
                content: content.into(),
                attributes: BTreeMap::new(),
            },
        )
    }

    /// The serialized `type` discriminant.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Check if this is an `HtmlContent` node.
    #[must_use]
    pub fn is_html(&self) -> bool {
        matches!(self.kind, ComponentKind::HtmlContent { .. })
    }

    /// Check if this is a synthetic text-run node.
    #[must_use]
    pub fn is_text_run(&self) -> bool {
        matches!(&self.kind, ComponentKind::HtmlContent { tag, .. } if tag == TEXT_NODE_TAG)
    }

    /// Tag of an `HtmlContent` node.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::HtmlContent { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Concatenated `HtmlContent` text of this node and its subtree.
    ///
    /// Field labels are not included; they are metadata, not content.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for component in self.descendants() {
            if let ComponentKind::HtmlContent { content, .. } = &component.kind {
                text.push_str(content);
            }
        }
        text
    }

    /// Depth-first, pre-order walk over this node and all its descendants.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a component subtree.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a BaseComponent>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a BaseComponent;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

/// Title of a [`ContentSection`].
///
/// Kept as a full component rather than a string so it retains its own
/// identifier; serializes with `"type": "title-section"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "title-section")]
pub struct TitleSection {
    /// Unique identifier.
    pub pk: String,

    /// Heading text.
    pub title: String,

    /// Paragraph text under the heading.
    pub subtitle: String,

    /// Always empty for section titles.
    #[serde(default)]
    pub children: Vec<BaseComponent>,
}

impl TitleSection {
    /// Create a title section with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, pk_suffix: &str) -> Self {
        Self {
            pk: generate_pk(pk_suffix),
            title: title.into(),
            subtitle: subtitle.into(),
            children: Vec::new(),
        }
    }
}

impl From<TitleSection> for BaseComponent {
    fn from(section: TitleSection) -> Self {
        Self {
            pk: section.pk,
            kind: ComponentKind::TitleSection {
                title: section.title,
                subtitle: section.subtitle,
            },
            children: section.children,
        }
    }
}

/// An ordered unit of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Optional section title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleSection>,

    /// Components in document order.
    #[serde(default)]
    pub components: Vec<BaseComponent>,
}

impl ContentSection {
    /// Create an untitled, empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty section with a title.
    #[must_use]
    pub fn with_title(title: TitleSection) -> Self {
        Self {
            title: Some(title),
            components: Vec::new(),
        }
    }

    /// A section is empty when it has neither title nor components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.components.is_empty()
    }

    /// Title text, if the section is titled.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_ref().map(|t| t.title.as_str())
    }
}

/// Parser output: ordered sections, serialized as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: Vec<ContentSection>,
}

impl Document {
    /// Wrap parsed sections.
    #[must_use]
    pub fn new(sections: Vec<ContentSection>) -> Self {
        Self { sections }
    }

    /// The sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[ContentSection] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over the sections.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentSection> {
        self.sections.iter()
    }

    /// Take ownership of the sections.
    #[must_use]
    pub fn into_sections(self) -> Vec<ContentSection> {
        self.sections
    }

    /// Every component of every section tree, pre-order. Section titles are
    /// not included.
    pub fn components(&self) -> impl Iterator<Item = &BaseComponent> {
        self.sections
            .iter()
            .flat_map(|section| section.components.iter())
            .flat_map(BaseComponent::descendants)
    }

    /// Count of components per `type`, section titles included.
    #[must_use]
    pub fn component_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        let titles = self.sections.iter().filter(|s| s.title.is_some()).count();
        if titles > 0 {
            counts.insert("title-section", titles);
        }
        for component in self.components() {
            *counts.entry(component.type_name()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ContentSection;
    type IntoIter = std::slice::Iter<'a, ContentSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
