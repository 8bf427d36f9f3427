//! Element model
//!
//!     A parsed markdown document is a sequence of [`Element`]s. The set of variants is closed,
//!     so narrowing is a match on the enum rather than a runtime type check. Every variant wraps a
//!     dedicated struct, which is what callers narrow to:
//!
//!     | Variant            | Attributes                              | Children            |
//!     |--------------------|-----------------------------------------|---------------------|
//!     | Text               | value, bold                             | no                  |
//!     | LineBreak          |                                         | no                  |
//!     | CustomIdentifier   | identifier                              | no                  |
//!     | Heading            | level, elements                         | elements            |
//!     | Link               | link, elements, tooltip                 | elements            |
//!     | Image              | link, label, tooltip                    | no                  |
//!     | Paragraph          | elements                                | elements            |
//!     | UnorderedList      | elements                                | elements            |
//!     | OrderedList        | elements                                | elements            |
//!     | Table              | columns, rows                           | columns ++ rows     |
//!     | Row                | cells                                   | cells               |
//!     | Column             | elements                                | elements            |
//!     | Cell               | a Column                                | elements            |
//!
//!     A Cell embeds a Column, so narrowing a Cell to [`Column`] succeeds. Two more kinds work
//!     the same way across several variants: both list variants embed a [`BasicList`], and every
//!     structural variant embeds its child list as an [`ElementWithChildren`]. Narrowing to
//!     [`Element`] itself always succeeds.
//!
//! Clone and filter
//!
//!     [`Element::clone_and_filter`] copies a subtree while dropping everything the predicate
//!     rejects. Structural elements are rebuilt from their surviving children first and only then
//!     judged by the predicate, so an element whose children were all removed is still kept unless
//!     the predicate rejects the rebuilt element itself.

mod block;
mod inline;
mod table;

pub use block::{BasicList, Heading, OrderedList, Paragraph, UnorderedList};
pub use inline::{CustomIdentifier, Image, LineBreak, Link, Text};
pub use table::{Cell, Column, Row, StringTable, Table};

use serde::Serialize;

/// Keep/drop decision used by [`Element::clone_and_filter`].
pub type Predicate<'p> = dyn Fn(&Element) -> bool + 'p;

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum Element {
    Text(Text),
    LineBreak(LineBreak),
    CustomIdentifier(CustomIdentifier),
    Heading(Heading),
    Link(Link),
    Image(Image),
    Paragraph(Paragraph),
    UnorderedList(UnorderedList),
    OrderedList(OrderedList),
    Table(Table),
    Row(Row),
    Column(Column),
    Cell(Cell),
}

/// A shape an [`Element`] can be narrowed to.
///
/// Implemented by every variant struct, by [`Column`] (which also matches cells), by
/// [`BasicList`] (both list variants), by [`ElementWithChildren`] (every structural variant)
/// and by [`Element`] itself (which matches everything). The processor uses the same trait to decide
/// which handlers fire for an element.
pub trait ElementKind {
    fn narrow(element: &Element) -> Option<&Self>;
}

impl ElementKind for Element {
    fn narrow(element: &Element) -> Option<&Self> {
        Some(element)
    }
}

macro_rules! element_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl ElementKind for $variant {
                fn narrow(element: &Element) -> Option<&Self> {
                    match element {
                        Element::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for Element {
                fn from(inner: $variant) -> Self {
                    Element::$variant(inner)
                }
            }
        )*
    };
}

element_kind!(
    Text,
    LineBreak,
    CustomIdentifier,
    Heading,
    Link,
    Image,
    Paragraph,
    UnorderedList,
    OrderedList,
    Table,
    Row,
    Cell,
);

impl ElementKind for Column {
    fn narrow(element: &Element) -> Option<&Self> {
        match element {
            Element::Column(column) => Some(column),
            Element::Cell(cell) => Some(cell.column()),
            _ => None,
        }
    }
}

impl From<Column> for Element {
    fn from(column: Column) -> Self {
        Element::Column(column)
    }
}

impl ElementKind for BasicList {
    fn narrow(element: &Element) -> Option<&Self> {
        match element {
            Element::UnorderedList(list) => Some(list.list()),
            Element::OrderedList(list) => Some(list.list()),
            _ => None,
        }
    }
}

impl ElementKind for ElementWithChildren {
    fn narrow(element: &Element) -> Option<&Self> {
        match element {
            Element::Text(_)
            | Element::LineBreak(_)
            | Element::CustomIdentifier(_)
            | Element::Image(_) => None,
            Element::Heading(heading) => Some(heading.as_element_with_children()),
            Element::Link(link) => Some(link.as_element_with_children()),
            Element::Paragraph(paragraph) => Some(paragraph.as_element_with_children()),
            Element::UnorderedList(list) => Some(list.list().as_element_with_children()),
            Element::OrderedList(list) => Some(list.list().as_element_with_children()),
            Element::Table(table) => Some(table.as_element_with_children()),
            Element::Row(row) => Some(row.as_element_with_children()),
            Element::Column(column) => Some(column.as_element_with_children()),
            Element::Cell(cell) => Some(cell.column().as_element_with_children()),
        }
    }
}

/// The ordered child list of a structural element.
///
/// Every structural variant is built around one, so a handler registered for this kind fires
/// for headings, links, paragraphs, lists and every part of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementWithChildren {
    elements: Vec<Element>,
}

impl ElementWithChildren {
    pub fn new(elements: Vec<Element>) -> Self {
        ElementWithChildren { elements }
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

    pub(crate) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        ElementWithChildren {
            elements: filter_elements(&self.elements, predicate),
        }
    }
}

impl Element {
    /// Narrows this element to `T`, or `None` if the variant does not match.
    pub fn as_kind<T: ElementKind>(&self) -> Option<&T> {
        T::narrow(self)
    }

    /// Whether this element can be narrowed to `T`.
    pub fn is<T: ElementKind>(&self) -> bool {
        T::narrow(self).is_some()
    }

    pub fn as_text(&self) -> Option<&Text> {
        self.as_kind()
    }

    pub fn as_line_break(&self) -> Option<&LineBreak> {
        self.as_kind()
    }

    pub fn as_custom_identifier(&self) -> Option<&CustomIdentifier> {
        self.as_kind()
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        self.as_kind()
    }

    pub fn as_link(&self) -> Option<&Link> {
        self.as_kind()
    }

    pub fn as_image(&self) -> Option<&Image> {
        self.as_kind()
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        self.as_kind()
    }

    pub fn as_unordered_list(&self) -> Option<&UnorderedList> {
        self.as_kind()
    }

    pub fn as_ordered_list(&self) -> Option<&OrderedList> {
        self.as_kind()
    }

    /// Narrows ordered and unordered lists alike.
    pub fn as_list(&self) -> Option<&BasicList> {
        self.as_kind()
    }

    pub fn as_table(&self) -> Option<&Table> {
        self.as_kind()
    }

    pub fn as_row(&self) -> Option<&Row> {
        self.as_kind()
    }

    /// Narrows columns and cells alike.
    pub fn as_column(&self) -> Option<&Column> {
        self.as_kind()
    }

    pub fn as_cell(&self) -> Option<&Cell> {
        self.as_kind()
    }

    /// Stable name of the variant, used for logging and visualization.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::LineBreak(_) => "LineBreak",
            Element::CustomIdentifier(_) => "CustomIdentifier",
            Element::Heading(_) => "Heading",
            Element::Link(_) => "Link",
            Element::Image(_) => "Image",
            Element::Paragraph(_) => "Paragraph",
            Element::UnorderedList(_) => "UnorderedList",
            Element::OrderedList(_) => "OrderedList",
            Element::Table(_) => "Table",
            Element::Row(_) => "Row",
            Element::Column(_) => "Column",
            Element::Cell(_) => "Cell",
        }
    }

    /// The child list of a structural element, `None` for leaves.
    pub fn as_element_with_children(&self) -> Option<&ElementWithChildren> {
        self.as_kind()
    }

    /// Whether this variant owns a child list (which may still be empty).
    pub fn has_children_capability(&self) -> bool {
        self.is::<ElementWithChildren>()
    }

    /// The ordered children of this element. Empty for leaves.
    ///
    /// For a table these are the header columns followed by the body rows.
    pub fn children(&self) -> &[Element] {
        match self.as_element_with_children() {
            Some(children) => children.elements(),
            None => &[],
        }
    }

    /// Copies this element, keeping only the parts of the subtree `predicate` accepts.
    ///
    /// Returns `None` when the (rebuilt) element itself is rejected.
    pub fn clone_and_filter(&self, predicate: &Predicate<'_>) -> Option<Element> {
        let candidate = match self {
            Element::Text(_)
            | Element::LineBreak(_)
            | Element::CustomIdentifier(_)
            | Element::Image(_) => self.clone(),
            Element::Heading(heading) => heading.filtered(predicate).into(),
            Element::Link(link) => link.filtered(predicate).into(),
            Element::Paragraph(paragraph) => paragraph.filtered(predicate).into(),
            Element::UnorderedList(list) => list.filtered(predicate).into(),
            Element::OrderedList(list) => list.filtered(predicate).into(),
            Element::Table(table) => table.filtered(predicate).into(),
            Element::Row(row) => row.filtered(predicate).into(),
            Element::Column(column) => column.filtered(predicate).into(),
            Element::Cell(cell) => cell.filtered(predicate).into(),
        };

        if predicate(&candidate) {
            Some(candidate)
        } else {
            None
        }
    }
}

/// Filters each child and collects the survivors, preserving order.
pub(crate) fn filter_elements(elements: &[Element], predicate: &Predicate<'_>) -> Vec<Element> {
    elements
        .iter()
        .filter_map(|element| element.clone_and_filter(predicate))
        .collect()
}

/// Identifiers of the direct [`CustomIdentifier`] children among `elements`.
pub(crate) fn direct_custom_ids(elements: &[Element]) -> Vec<&str> {
    elements
        .iter()
        .filter_map(Element::as_custom_identifier)
        .map(CustomIdentifier::identifier)
        .collect()
}
