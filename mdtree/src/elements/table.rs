//! Tables.
//!
//!     A [`Table`] holds its header [`Column`]s and body [`Row`]s. Both are kept in a single
//!     child list (columns first), so the table hands out its children like any other structural
//!     element while the typed accessors still see two separate lists. Rows hold [`Cell`]s, and a cell is a
//!     column in everything but name.

use super::{filter_elements, Element, ElementKind, ElementWithChildren, Predicate, Text};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A table column header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column {
    #[serde(flatten)]
    children: ElementWithChildren,
}

impl Column {
    pub fn new(elements: Vec<Element>) -> Self {
        Column {
            children: ElementWithChildren::new(elements),
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.children.elements()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.children
    }

    /// Concatenation of the Text children's values; other children contribute nothing.
    pub fn to_text(&self) -> String {
        self.elements()
            .iter()
            .filter_map(Element::as_text)
            .map(Text::value)
            .collect()
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Column {
            children: self.children.filtered(predicate),
        }
    }
}

/// A body cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cell {
    #[serde(flatten)]
    column: Column,
}

impl Cell {
    pub fn new(elements: Vec<Element>) -> Self {
        Cell {
            column: Column::new(elements),
        }
    }

    /// The column fields this cell is made of.
    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn into_column(self) -> Column {
        self.column
    }

    pub fn elements(&self) -> &[Element] {
        self.column.elements()
    }

    pub fn to_text(&self) -> String {
        self.column.to_text()
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Cell {
            column: self.column.filtered(predicate),
        }
    }
}

/// A body row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    #[serde(flatten)]
    cells: ElementWithChildren,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            cells: ElementWithChildren::new(cells.into_iter().map(Element::Cell).collect()),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.elements().iter().filter_map(Cell::narrow)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.cells
    }

    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        Row {
            cells: self.cells.filtered(predicate),
        }
    }
}

/// A pipe table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    children: ElementWithChildren,
    column_count: usize,
}

impl Table {
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Self {
        let column_count = columns.len();
        let elements = columns
            .into_iter()
            .map(Element::Column)
            .chain(rows.into_iter().map(Element::Row))
            .collect();
        Table {
            children: ElementWithChildren::new(elements),
            column_count,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.children.elements()[..self.column_count]
            .iter()
            .filter_map(Column::narrow)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.children.elements()[self.column_count..]
            .iter()
            .filter_map(Row::narrow)
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.children.len() - self.column_count
    }

    /// Columns followed by rows.
    pub fn as_element_with_children(&self) -> &ElementWithChildren {
        &self.children
    }

    /// Every custom identifier anywhere inside the table, in document order.
    pub fn custom_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_custom_ids(self.children.elements(), &mut ids);
        ids
    }

    /// The table as a plain grid of strings.
    pub fn as_string_table(&self) -> StringTable {
        let titles: Vec<String> = self.columns().map(Column::to_text).collect();
        self.rows().fold(
            StringTable::new().add_column_titles(titles),
            |table, row| table.add_row(row.cells().map(Cell::to_text)),
        )
    }

    /// Columns and rows are filtered independently, each keeping its own survivors.
    pub(super) fn filtered(&self, predicate: &Predicate<'_>) -> Self {
        let (columns, rows) = self.children.elements().split_at(self.column_count);
        let columns = filter_elements(columns, predicate);
        let column_count = columns.len();
        let mut elements = columns;
        elements.extend(filter_elements(rows, predicate));
        Table {
            children: ElementWithChildren::new(elements),
            column_count,
        }
    }
}

fn collect_custom_ids<'e>(elements: &'e [Element], ids: &mut Vec<&'e str>) {
    for element in elements {
        if let Element::CustomIdentifier(id) = element {
            ids.push(id.identifier());
        }
        collect_custom_ids(element.children(), ids);
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (columns, rows) = self.children.elements().split_at(self.column_count);
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("columns", columns)?;
        state.serialize_field("rows", rows)?;
        state.end()
    }
}

/// A grid of strings: column titles plus rows of cell values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringTable {
    column_titles: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_titles.extend(titles.into_iter().map(Into::into));
        self
    }

    pub fn add_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn column_titles(&self) -> &[String] {
        &self.column_titles
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
