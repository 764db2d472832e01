//! Component parsers for SOP content.

mod fields;
mod generic;
mod sections;

pub use fields::*;
pub use generic::*;
pub use sections::*;
