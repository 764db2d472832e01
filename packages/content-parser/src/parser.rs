//! Document parser that ties loading, walking and splitting together.

use std::sync::LazyLock;

use crate::config::{validate_content, ParserOptions};
use crate::error::{ParserError, Result};
use crate::html::HtmlDocument;
use crate::registry::{create_default_registry, ComponentParser, ComponentRegistry, ParseEngine};
use crate::splitting::SectionSplitter;
use crate::types::Document;

static DEFAULT_PARSER: LazyLock<ContentParser> = LazyLock::new(ContentParser::new);

/// Parse SOP content with the default parser.
///
/// # Arguments
/// * `html` - The stored rich-text body of an SOP
///
/// # Returns
/// The ordered sections of the document
///
/// # Examples
/// ```
/// use sopwise_content_parser::parse_content;
///
/// let document = parse_content(r#"<div data-id="title-section"><h1>Intro</h1></div><p>Hello</p>"#)?;
/// assert_eq!(document.len(), 1);
/// assert_eq!(document.sections()[0].title_text(), Some("Intro"));
/// # Ok::<(), sopwise_content_parser::ParserError>(())
/// ```
pub fn parse_content(html: &str) -> Result<Document> {
    DEFAULT_PARSER.parse(html)
}

/// Converts SOP rich-text HTML into a [`Document`].
///
/// A parser holds only its registry and options; every call to
/// [`parse`](Self::parse) builds its own section and step state, so one
/// instance can be shared across threads.
#[derive(Debug)]
pub struct ContentParser {
    engine: ParseEngine,
    options: ParserOptions,
}

impl ContentParser {
    /// Create a parser with the default registry and options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(create_default_registry())
    }

    /// Create a parser over a custom registry.
    #[must_use]
    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Self {
            engine: ParseEngine::new(registry),
            options: ParserOptions::default(),
        }
    }

    /// Replace the parser options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Register (or replace) the parser for a marker value.
    pub fn register_parser(
        &mut self,
        marker: impl Into<String>,
        parser: impl ComponentParser + 'static,
    ) {
        self.engine.registry_mut().register(marker, parser);
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The active registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        self.engine.registry()
    }

    /// Parse SOP content into ordered sections.
    ///
    /// Odd or malformed markup never fails; it is recovered the way a
    /// browser would and then walked as usual.
    ///
    /// # Errors
    /// * `ParserError::ContentTooLarge` if the input exceeds the configured limit
    /// * `ParserError::MissingBody` if the loaded tree has no body element
    pub fn parse(&self, html: &str) -> Result<Document> {
        if let Err(e) = validate_content(html, self.options.max_content_length) {
            tracing::warn!(error = %e, "Rejected SOP content");
            return Err(e);
        }

        let source = if self.options.strip_line_breaks {
            html.replace(['\r', '\n'], "")
        } else {
            html.to_string()
        };

        let doc = HtmlDocument::parse(&source);
        if doc.recovered_errors() > 0 {
            tracing::trace!(errors = doc.recovered_errors(), "Recovered malformed markup");
        }
        let body = doc.body().ok_or(ParserError::MissingBody)?;

        let sections =
            SectionSplitter::new(&self.engine, self.options.step_numbering).split(body);
        let document = Document::new(sections);

        tracing::debug!(
            sections = document.len(),
            components = document.components().count(),
            "Parsed SOP content"
        );

        Ok(document)
    }
}

impl Default for ContentParser {
    fn default() -> Self {
        Self::new()
    }
}
