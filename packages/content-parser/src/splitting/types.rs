//! State carried through one split.

use crate::config::StepNumbering;
use crate::registry::handlers::procedure_step;
use crate::types::{BaseComponent, ContentSection, TitleSection};

/// Mutable state of a single split call.
///
/// Created fresh for every document, so concurrent splits never share
/// sections or step numbering.
#[derive(Debug)]
pub struct SplitContext {
    numbering: StepNumbering,
    sections: Vec<ContentSection>,
    current: ContentSection,
    step: usize,
}

impl SplitContext {
    /// Create an empty context.
    #[must_use]
    pub fn new(numbering: StepNumbering) -> Self {
        Self {
            numbering,
            sections: Vec::new(),
            current: ContentSection::new(),
            step: 0,
        }
    }

    /// Number of the last procedure step emitted (0 before the first).
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Append a component to the current section.
    pub fn push_component(&mut self, component: BaseComponent) {
        self.current.components.push(component);
    }

    /// Push the current section if it has content, then start an empty one.
    pub fn flush(&mut self) {
        let section = std::mem::take(&mut self.current);
        if section.is_empty() {
            return;
        }
        tracing::debug!(
            title = section.title_text().unwrap_or_default(),
            components = section.components.len(),
            "Flushed section"
        );
        self.sections.push(section);
    }

    /// Close the current section and open one under `title`.
    pub fn start_titled(&mut self, title: TitleSection) {
        self.flush();
        if self.numbering == StepNumbering::PerTitleSection {
            self.step = 0;
        }
        self.current = ContentSection::with_title(title);
    }

    /// Emit a complete "Step N" section holding `component`.
    ///
    /// The section is pushed immediately; whatever follows goes into a
    /// fresh untitled section.
    pub fn push_step(&mut self, component: Option<BaseComponent>) {
        self.flush();
        self.step += 1;

        let mut section = ContentSection::with_title(procedure_step(self.step));
        section.components.extend(component);
        self.current = section;
        self.flush();
    }

    /// Flush the last section and return all sections in order.
    #[must_use]
    pub fn finish(mut self) -> Vec<ContentSection> {
        self.flush();
        self.sections
    }
}
