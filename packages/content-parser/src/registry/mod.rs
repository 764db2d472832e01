//! Component parser registry and recursive tree walker.
//!
//! Semantic marker values (`data-id`) map to dedicated node-to-component
//! parsers. Anything without a registered marker falls back to a generic
//! HTML component, so unknown markup never fails a parse.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;

pub use config::create_default_registry;
pub use core::ComponentRegistry;
pub use engine::ParseEngine;
pub use handler::ComponentParser;
