//! Component parser trait definition.

use crate::html::HtmlNode;
use crate::types::BaseComponent;

/// Trait for marker-specific component parsers.
///
/// A parser converts the marked element itself into one component. The
/// engine recurses into the element's children afterwards, so parsers never
/// walk the subtree on their own. Returning `None` drops the element.
///
/// Plain functions and closures taking an [`HtmlNode`] implement this trait,
/// so ad-hoc parsers can be registered without a dedicated type.
pub trait ComponentParser: Send + Sync {
    /// Convert the marked element into a component.
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent>;
}

impl<F> ComponentParser for F
where
    F: Fn(HtmlNode<'_>) -> Option<BaseComponent> + Send + Sync,
{
    fn parse(&self, node: HtmlNode<'_>) -> Option<BaseComponent> {
        self(node)
    }
}
