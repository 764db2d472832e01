//! Configuration constants, options and validation for the content parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ParserError, Result};

/// Attribute carrying the semantic marker of an element.
pub const MARKER_ATTRIBUTE: &str = "data-id";

/// Identity attribute, never copied into `HtmlContent` attributes.
pub const IDENTITY_ATTRIBUTE: &str = "id";

/// Marker value for a titled section (heading + paragraph).
pub const TITLE_SECTION_MARKER: &str = "title-section";

/// Marker value for a single-line input container.
pub const INPUT_FIELD_MARKER: &str = "input-field";

/// Marker value for a checkbox container.
pub const CHECKBOX_MARKER: &str = "checkbox";

/// Marker value for a radio button container.
pub const RADIO_BUTTON_MARKER: &str = "radio-button";

/// Marker value for a multi-line text area.
pub const TEXT_AREA_MARKER: &str = "text-area";

/// Marker value on a list item that starts an auto-numbered step section.
pub const PROCEDURE_STEP_MARKER: &str = "procedure-li";

/// Selector for inline comment annotations that get flattened to text.
pub const COMMENT_SELECTOR: &str = r#"span[id="comment"]"#;

/// Tag recorded on synthetic text-run nodes.
pub const TEXT_NODE_TAG: &str = "text";

/// Tag used when an element has no readable tag name.
pub const DEFAULT_TAG: &str = "div";

/// Default number of rows for a text area without a usable `rows` attribute.
pub const DEFAULT_TEXT_AREA_ROWS: u32 = 4;

/// Default number of columns for a text area without a usable `cols` attribute.
pub const DEFAULT_TEXT_AREA_COLS: u32 = 50;

/// Maximum element nesting the walker descends into.
///
/// Elements nested deeper are flattened into the text run of their
/// ancestor at this depth. Keeps serialized flow data within the nesting
/// limit of the JSON reader.
pub const MAX_NESTING_DEPTH: usize = 48;

/// Maximum accepted SOP content length in characters.
///
/// Matches the limit the SOP storage layer enforces on the `content` field.
pub const MAX_CONTENT_LENGTH: usize = 1_000_000;

/// Leading integer of an attribute value, e.g. `10px`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_INT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\+?(\d+)").expect("valid regex"));

/// How procedure steps are numbered across a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepNumbering {
    /// Numbering restarts at "Step 1" after every title section.
    #[default]
    PerTitleSection,

    /// One running count for the whole document.
    Continuous,
}

/// Runtime options for a [`ContentParser`](crate::parser::ContentParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Step numbering policy.
    pub step_numbering: StepNumbering,

    /// Remove line breaks from the raw input before loading.
    pub strip_line_breaks: bool,

    /// Maximum accepted input length in characters.
    pub max_content_length: usize,
}

impl ParserOptions {
    /// Create options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step numbering policy.
    #[must_use]
    pub fn with_step_numbering(mut self, step_numbering: StepNumbering) -> Self {
        self.step_numbering = step_numbering;
        self
    }

    /// Set whether line breaks are stripped before loading.
    #[must_use]
    pub fn with_strip_line_breaks(mut self, strip: bool) -> Self {
        self.strip_line_breaks = strip;
        self
    }

    /// Set the maximum accepted input length.
    #[must_use]
    pub fn with_max_content_length(mut self, limit: usize) -> Self {
        self.max_content_length = limit;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            step_numbering: StepNumbering::default(),
            strip_line_breaks: true,
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }
}

/// Validate raw SOP content before parsing.
///
/// # Returns
/// * `Ok(())` if the content is within `limit` characters
/// * `Err(ParserError::ContentTooLarge)` otherwise
///
/// # Examples
/// ```
/// use sopwise_content_parser::config::{validate_content, MAX_CONTENT_LENGTH};
///
/// assert!(validate_content("<p>Hello</p>", MAX_CONTENT_LENGTH).is_ok());
/// assert!(validate_content("<p>Hello</p>", 4).is_err());
/// ```
pub fn validate_content(html: &str, limit: usize) -> Result<()> {
    let size = html.chars().count();
    if size > limit {
        return Err(ParserError::ContentTooLarge { size, limit });
    }
    Ok(())
}

/// Parse the leading integer of an attribute value.
///
/// Trailing garbage is ignored (`"10px"` is 10). Returns `None` when the
/// value does not start with digits.
///
/// # Examples
/// ```
/// use sopwise_content_parser::config::parse_leading_int;
///
/// assert_eq!(parse_leading_int("12"), Some(12));
/// assert_eq!(parse_leading_int(" 8rows"), Some(8));
/// assert_eq!(parse_leading_int("wide"), None);
/// ```
pub fn parse_leading_int(value: &str) -> Option<u32> {
    LEADING_INT_PATTERN
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}
