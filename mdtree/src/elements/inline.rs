//! Leaf and inline elements: text, line breaks, custom identifiers, links and images.

use super::{direct_custom_ids, Element, ElementWithChildren, Predicate};
use serde::Serialize;

/// A run of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    value: String,
    bold: bool,
}

impl Text {
    pub fn new(value: impl Into<String>, bold: bool) -> Self {
        Text {
            value: value.into(),
            bold,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// A soft line break inside a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineBreak;

/// A `{token}` marker lifted out of the surrounding text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomIdentifier {
    identifier: String,
}

impl CustomIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        CustomIdentifier {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// A hyperlink. The label is not stored; it is derived from the text children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    link: String,
    #[serde(flatten)]
    children: ElementWithChildren,
    tooltip: Option<String>,
}

impl Link {
    pub fn new(link: impl Into<String>, elements: Vec<Element>, tooltip: Option<String>) -> Self {
        Link {
            link: link.into(),
            children: ElementWithChildren::new(elements),
            tooltip,
        }
    }

    /// The link destination.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn elements(&self) -> &[Element] {
        self.children.elements()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.children
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Concatenation of the values of the Text children.
    pub fn label(&self) -> String {
        self.elements()
            .iter()
            .filter_map(Element::as_text)
            .map(Text::value)
            .collect()
    }

    pub fn custom_ids(&self) -> Vec<&str> {
        direct_custom_ids(self.elements())
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Link {
            link: self.link.clone(),
            children: self.children.filtered(predicate),
            tooltip: self.tooltip.clone(),
        }
    }
}

/// An image. Unlike [`Link`], the label is a flat string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    link: String,
    label: String,
    tooltip: Option<String>,
}

impl Image {
    pub fn new(link: impl Into<String>, label: impl Into<String>, tooltip: Option<String>) -> Self {
        Image {
            link: link.into(),
            label: label.into(),
            tooltip,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}
