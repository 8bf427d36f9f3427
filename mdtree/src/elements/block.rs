//! Block elements that own a flat list of children: headings, paragraphs and lists.

use super::{direct_custom_ids, Element, ElementWithChildren, Image, Link, Predicate};
use serde::Serialize;

/// A heading. Its text is derived from the children, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    level: usize,
    #[serde(flatten)]
    children: ElementWithChildren,
}

impl Heading {
    pub fn new(level: usize, elements: Vec<Element>) -> Self {
        Heading {
            level,
            children: ElementWithChildren::new(elements),
        }
    }

    /// The heading level, `1` for `#`.
    pub fn strength(&self) -> usize {
        self.level
    }

    pub fn elements(&self) -> &[Element] {
        self.children.elements()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.children
    }

    /// Text children verbatim, links and images by their label, everything else skipped.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for element in self.elements() {
            match element {
                Element::Text(value) => text.push_str(value.value()),
                Element::Link(link) => text.push_str(&link.label()),
                Element::Image(image) => text.push_str(image.label()),
                _ => {}
            }
        }
        text
    }

    pub fn custom_ids(&self) -> Vec<&str> {
        direct_custom_ids(self.elements())
    }

    pub fn links(&self) -> Vec<&Link> {
        self.elements().iter().filter_map(Element::as_link).collect()
    }

    pub fn images(&self) -> Vec<&Image> {
        self.elements().iter().filter_map(Element::as_image).collect()
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Heading {
            level: self.level,
            children: self.children.filtered(predicate),
        }
    }
}

/// A blank-line delimited block, only produced when paragraph wrapping is enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    #[serde(flatten)]
    children: ElementWithChildren,
}

impl Paragraph {
    pub fn new(elements: Vec<Element>) -> Self {
        Paragraph {
            children: ElementWithChildren::new(elements),
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.children.elements()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Paragraph {
            children: self.children.filtered(predicate),
        }
    }
}

/// The items of a list, whichever kind of list holds them.
///
/// Items are flattened into the list, typically one Text per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicList {
    #[serde(flatten)]
    items: ElementWithChildren,
}

impl BasicList {
    pub fn new(elements: Vec<Element>) -> Self {
        BasicList {
            items: ElementWithChildren::new(elements),
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.items.elements()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        BasicList {
            items: self.items.filtered(predicate),
        }
    }
}

macro_rules! list_kind {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct $name {
            #[serde(flatten)]
            list: BasicList,
        }

        impl $name {
            pub fn new(elements: Vec<Element>) -> Self {
                $name {
                    list: BasicList::new(elements),
                }
            }

            pub fn list(&self) -> &BasicList {
                &self.list
            }

            pub fn elements(&self) -> &[Element] {
                self.list.elements()
            }

            pub fn len(&self) -> usize {
                self.list.len()
            }

            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
                $name {
                    list: self.list.filtered(predicate),
                }
            }
        }
    };
}

list_kind!(
    /// A bullet list.
    UnorderedList
);

list_kind!(
    /// A numbered list.
    OrderedList
);
