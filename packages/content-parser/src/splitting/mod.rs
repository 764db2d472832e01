//! Section splitting for SOP documents.
//!
//! Groups the walked top-level content of `<body>` into ordered
//! [`ContentSection`](crate::types::ContentSection)s, opening sections at
//! title markers and procedure steps.

mod engine;
mod types;

pub use engine::SectionSplitter;
pub use types::SplitContext;
