//! The parsed document: an immutable sequence of top-level elements.

use crate::elements::{Element, ElementKind};
use crate::processor::Processor;
use serde::Serialize;
use tracing::debug;

/// Result of a parse call.
///
/// Queries only look at the top-level sequence; use [`Element::children`] or a
/// [`Processor`] to reach nested elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedDocument {
    elements: Vec<Element>,
}

impl ParsedDocument {
    pub fn new(elements: Vec<Element>) -> Self {
        ParsedDocument { elements }
    }

    /// Iterate over the top-level elements. Each call starts a fresh iteration.
    pub fn get(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first top-level element narrowable to `T`.
    pub fn find_first<T: ElementKind>(&self) -> Option<&T> {
        self.elements.iter().find_map(T::narrow)
    }

    /// Every top-level element narrowable to `T`, in document order.
    pub fn filter_by_type<'a, T: ElementKind + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.elements.iter().filter_map(T::narrow)
    }

    /// A copy of this document with every custom identifier removed, at any depth.
    pub fn clear_custom_tokens(&self) -> ParsedDocument {
        let not_custom_id = |element: &Element| element.as_custom_identifier().is_none();
        let elements: Vec<Element> = self
            .elements
            .iter()
            .filter_map(|element| element.clone_and_filter(&not_custom_id))
            .collect();

        debug!(
            before = self.elements.len(),
            after = elements.len(),
            "cleared custom identifier tokens"
        );
        ParsedDocument { elements }
    }

    /// A processor with no handlers registered, bound to this document.
    pub fn new_processor<'a>(&self) -> Processor<'_, 'a> {
        Processor::new(self)
    }
}

impl<'d> IntoIterator for &'d ParsedDocument {
    type Item = &'d Element;
    type IntoIter = std::slice::Iter<'d, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.get()
    }
}
