//! Markdown parsing (Markdown → element tree)
//!
//! Pipeline: Markdown string → Comrak AST → element tree
//!
//!     Comrak owns the grammar and always produces a node tree, whatever the input. This module
//!     walks that tree once, depth first. Node kinds that become structural elements (headings,
//!     links, paragraphs when wrapping, lists, tables and their rows and cells) open a nested
//!     scope: a recursive call with its own output vector, whose result becomes the children of
//!     the emitted element. Every other node kind is transparent and its children land in the
//!     enclosing scope.
//!
//!     Bold is tracked per scope and every nested scope starts out non-bold. Within a scope, an
//!     emphasis node opened with a single `*` marks the texts below it as bold, up to the next
//!     nested scope. `_` emphasis and strong emphasis are descended without changing the flag.
//!     Comrak does not keep the delimiter, so it is read back from the source position of the
//!     emphasis node.

use crate::elements::{
    Cell, CustomIdentifier, Element, Heading, Image, LineBreak, Link, OrderedList, Paragraph, Row,
    Table, Text, UnorderedList,
};
use crate::options::ParseOptions;
use comrak::nodes::{AstNode, LineColumn, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use once_cell::sync::Lazy;
use regex::Regex;

/// `{token}` or `{#token}`; the capture excludes the optional `#`.
static CUSTOM_ID_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{#?([^}]*)\}").expect("custom id pattern is valid"));

/// Parse a Markdown string into its top-level elements.
pub fn parse_elements(source: &str, options: &ParseOptions) -> Vec<Element> {
    let arena = Arena::new();
    let comrak_options = default_comrak_options();
    let root = parse_document(&arena, source, &comrak_options);

    let builder = TreeBuilder {
        options,
        source: SourceIndex::new(source),
    };
    builder.collect_children(root, false)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

struct TreeBuilder<'s, 'o> {
    options: &'o ParseOptions,
    source: SourceIndex<'s>,
}

impl TreeBuilder<'_, '_> {
    /// Opens a nested scope and returns everything emitted inside it.
    fn collect_children<'a>(&self, node: &'a AstNode<'a>, bold: bool) -> Vec<Element> {
        let mut elements = Vec::new();
        self.visit_children(node, bold, &mut elements);
        elements
    }

    fn visit_children<'a>(&self, node: &'a AstNode<'a>, bold: bool, out: &mut Vec<Element>) {
        for child in node.children() {
            self.visit(child, bold, out);
        }
    }

    fn visit<'a>(&self, node: &'a AstNode<'a>, bold: bool, out: &mut Vec<Element>) {
        let node_data = node.data.borrow();

        match &node_data.value {
            NodeValue::Emph => {
                let opened_with_star = self.source.byte_at(node_data.sourcepos.start) == Some(b'*');
                self.visit_children(node, bold || opened_with_star, out);
            }

            NodeValue::SoftBreak => out.push(LineBreak.into()),

            NodeValue::Text(literal) => self.push_text(literal, bold, out),

            NodeValue::Heading(heading) => {
                let elements = self.collect_children(node, false);
                out.push(Heading::new(heading.level as usize, elements).into());
            }

            NodeValue::Link(link) => {
                let elements = self.collect_children(node, false);
                out.push(Link::new(link.url.clone(), elements, non_empty(&link.title)).into());
            }

            NodeValue::Image(link) => {
                // Images keep a flat label, never structured children
                let mut label = String::new();
                collect_literal_text(node, &mut label);
                out.push(Image::new(link.url.clone(), label, non_empty(&link.title)).into());
            }

            NodeValue::Paragraph if self.options.wrap_into_paragraphs() => {
                let elements = self.collect_children(node, false);
                out.push(Paragraph::new(elements).into());
            }

            NodeValue::List(list) => {
                let items = self.collect_children(node, false);
                out.push(match list.list_type {
                    ListType::Bullet => UnorderedList::new(items).into(),
                    ListType::Ordered => OrderedList::new(items).into(),
                });
            }

            NodeValue::Table(_) => {
                let children = self.collect_children(node, false);
                out.push(assemble_table(children).into());
            }

            NodeValue::TableRow(header) => {
                let cells = into_cells(self.collect_children(node, false));
                if *header {
                    // Header cells become the table's columns directly, without a row
                    out.extend(cells.into_iter().map(|cell| Element::Column(cell.into_column())));
                } else {
                    out.push(Row::new(cells).into());
                }
            }

            NodeValue::TableCell => {
                let elements = self.collect_children(node, false);
                out.push(Cell::new(elements).into());
            }

            _ => self.visit_children(node, bold, out),
        }
    }

    fn push_text(&self, literal: &str, bold: bool, out: &mut Vec<Element>) {
        if !self.options.parse_custom_id_tokens() {
            out.push(Text::new(literal, bold).into());
            return;
        }

        for captures in CUSTOM_ID_TOKEN.captures_iter(literal) {
            out.push(CustomIdentifier::new(&captures[1]).into());
        }
        let remainder = CUSTOM_ID_TOKEN.replace_all(literal, "");
        out.push(Text::new(remainder, bold).into());
    }
}

fn assemble_table(children: Vec<Element>) -> Table {
    let mut rows = Vec::new();
    let mut columns = Vec::new();
    for child in children {
        match child {
            Element::Row(row) => rows.push(row),
            Element::Column(column) => columns.push(column),
            _ => {}
        }
    }
    Table::new(rows, columns)
}

fn into_cells(children: Vec<Element>) -> Vec<Cell> {
    children
        .into_iter()
        .filter_map(|child| match child {
            Element::Cell(cell) => Some(cell),
            _ => None,
        })
        .collect()
}

/// Concatenate the literals of every text node below `node`.
fn collect_literal_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    for child in node.children() {
        if let NodeValue::Text(literal) = &child.data.borrow().value {
            output.push_str(literal);
        }
        collect_literal_text(child, output);
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Maps comrak's 1-based line/column positions back to source bytes.
struct SourceIndex<'s> {
    bytes: &'s [u8],
    line_starts: Vec<usize>,
}

impl<'s> SourceIndex<'s> {
    fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(index, _)| index + 1));
        SourceIndex {
            bytes: source.as_bytes(),
            line_starts,
        }
    }

    fn byte_at(&self, position: LineColumn) -> Option<u8> {
        let line_start = *self.line_starts.get(position.line.checked_sub(1)?)?;
        let column = position.column.checked_sub(1)?;
        self.bytes.get(line_start + column).copied()
    }
}
