//! Sopwise content parser - Convert SOP rich-text HTML into structured sections.
//!
//! An SOP's stored HTML body is turned into a [`Document`]: ordered
//! [`ContentSection`]s, each with an optional title and a tree of typed
//! components (form fields, section titles and generic HTML). Unknown or
//! malformed markup never fails a parse; it falls back to generic HTML
//! components.
//!
//! # Example
//!
//! ```
//! use sopwise_content_parser::{parse_content, ComponentKind};
//!
//! let html = r#"
//!     <div data-id="title-section"><h1>Preparation</h1><p>Before you start</p></div>
//!     <ol><li data-id="procedure-li">Clean the bench</li></ol>
//!     <label>Gloves worn<input type="checkbox" checked></label>
//! "#;
//!
//! let document = parse_content(html)?;
//! let titles: Vec<_> = document.iter().filter_map(|s| s.title_text()).collect();
//! assert_eq!(titles, vec!["Preparation", "Step 1"]);
//!
//! let checkbox = document
//!     .components()
//!     .find(|c| c.type_name() == "checkbox")
//!     .unwrap();
//! assert!(matches!(checkbox.kind, ComponentKind::CheckboxField { checked: true, .. }));
//! # Ok::<(), sopwise_content_parser::ParserError>(())
//! ```
//!
//! # Architecture
//!
//! - [`html`]: HTML loading and the tree interface the parser walks
//! - [`types`]: Document model (sections and components)
//! - [`registry`]: Marker-to-parser registry and the recursive tree walker
//! - [`splitting`]: Grouping of top-level content into sections
//! - [`parser`]: The [`ContentParser`] entry point
//! - [`config`]: Marker constants, defaults and [`ParserOptions`]
//! - [`error`]: Error types and Result alias
//! - [`output`]: JSON/YAML flow data
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod output;
pub mod parser;
pub mod registry;
pub mod splitting;
pub mod types;

// Re-export commonly used items
pub use config::{ParserOptions, StepNumbering};
pub use error::{ParserError, Result};
pub use parser::{parse_content, ContentParser};
pub use registry::{ComponentParser, ComponentRegistry};
pub use types::{BaseComponent, ComponentKind, ContentSection, Document, TitleSection};
