//! Error types for the content parser.
//!
//! Parsing itself degrades gracefully on odd markup, so the only parse-time
//! failures are rejected inputs. The remaining variants belong to the
//! flow-data output and CLI layers.

use thiserror::Error;

/// Main error type for the content parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Input exceeds the maximum accepted SOP content length.
    #[error("SOP content is too large: {size} characters (limit is {limit})")]
    ContentTooLarge { size: usize, limit: usize },

    /// The loaded document has no `<body>` to walk.
    #[error("Invalid input: document has no body element")]
    MissingBody,

    /// Requested output format is not supported.
    #[error("Unsupported output format: '{0}'. Expected json or yaml")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
