//! Component registry for mapping marker values to parsers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::handler::ComponentParser;
use crate::config::MARKER_ATTRIBUTE;
use crate::html::HtmlNode;

/// Registry mapping semantic marker values to component parsers.
///
/// Lookup is an exact match on the element's `data-id` value. Registering
/// an existing marker replaces its parser.
pub struct ComponentRegistry {
    parsers: HashMap<String, Box<dyn ComponentParser>>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register (or replace) the parser for a marker value.
    pub fn register(&mut self, marker: impl Into<String>, parser: impl ComponentParser + 'static) {
        let marker = marker.into();
        if self.parsers.insert(marker.clone(), Box::new(parser)).is_some() {
            tracing::debug!(marker = %marker, "Replaced registered component parser");
        }
    }

    /// Get the parser for an element's marker value.
    ///
    /// Returns `None` if the element has no marker or the marker is unknown.
    pub fn get_parser(&self, node: HtmlNode<'_>) -> Option<&dyn ComponentParser> {
        let marker = node.attribute(MARKER_ATTRIBUTE)?;
        self.parsers.get(marker).map(|p| p.as_ref())
    }

    /// Check if a parser is registered for a marker.
    #[must_use]
    pub fn has_parser(&self, marker: &str) -> bool {
        self.parsers.contains_key(marker)
    }

    /// Return set of all registered marker values.
    #[must_use]
    pub fn registered_markers(&self) -> HashSet<&str> {
        self.parsers.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Check if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut markers: Vec<_> = self.registered_markers().into_iter().collect();
        markers.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("markers", &markers)
            .finish()
    }
}
