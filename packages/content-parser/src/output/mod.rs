//! Flow-data output for parsed documents.

mod format;
mod writer;

pub use format::OutputFormat;
pub use writer::{from_json, from_yaml, output_path, render, save_document, to_json, to_yaml};
