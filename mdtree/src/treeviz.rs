//! Treeviz formatter for parsed documents
//!
//! Treeviz renders the element tree one line per element, which makes a parse result quick to
//! scan and easy to snapshot. Nesting is drawn with `├─`/`└─` connectors, two columns per level.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ Document (2 elements)
//!   ├─ # h1 Title
//!   │ └─ ◦ Title
//!   └─ ☰ 2 items
//!     ├─ ◦ first
//!     └─ ◦ second
//!
//! Icons
//!     Document: ⧉
//!     Heading: #
//!     Paragraph: ¶
//!     UnorderedList: ☰
//!     OrderedList: ≡
//!     Text: ◦
//!     LineBreak: ↵
//!     Link: ⊕
//!     Image: ▣
//!     CustomIdentifier: ⚑
//!     Table: ▦
//!     Row: ⇥
//!     Column: ⊤
//!     Cell: □
//!     Bold marker (with `show-bold`): 𝐁

use crate::document::ParsedDocument;
use crate::elements::Element;
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

pub fn to_treeviz_str(doc: &ParsedDocument) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Recognized params: `show-bold` (`"true"` marks bold text).
pub fn to_treeviz_str_with_params(doc: &ParsedDocument, params: &HashMap<String, String>) -> String {
    let show_bold = params
        .get("show-bold")
        .map(|value| value == "true")
        .unwrap_or(false);

    let mut result = format!("⧉ Document ({} elements)\n", doc.len());
    append_children(&mut result, doc.elements(), "", show_bold);
    result
}

fn append_children(result: &mut String, children: &[Element], prefix: &str, show_bold: bool) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_element(result, child, prefix, is_last, show_bold);
    }
}

fn append_element(
    result: &mut String,
    element: &Element,
    prefix: &str,
    is_last: bool,
    show_bold: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&display_label(element, show_bold), MAX_LABEL_CHARS);

    result.push_str(prefix);
    result.push_str(connector);
    result.push(' ');
    result.push_str(icon(element));
    if !label.is_empty() {
        result.push(' ');
        result.push_str(&label);
    }
    result.push('\n');

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, element.children(), &new_prefix, show_bold);
}

fn icon(element: &Element) -> &'static str {
    match element {
        Element::Text(_) => "◦",
        Element::LineBreak(_) => "↵",
        Element::CustomIdentifier(_) => "⚑",
        Element::Heading(_) => "#",
        Element::Link(_) => "⊕",
        Element::Image(_) => "▣",
        Element::Paragraph(_) => "¶",
        Element::UnorderedList(_) => "☰",
        Element::OrderedList(_) => "≡",
        Element::Table(_) => "▦",
        Element::Row(_) => "⇥",
        Element::Column(_) => "⊤",
        Element::Cell(_) => "□",
    }
}

fn display_label(element: &Element, show_bold: bool) -> String {
    match element {
        Element::Text(text) if show_bold && text.is_bold() => format!("𝐁 {}", text.value()),
        Element::Text(text) => text.value().to_string(),
        Element::LineBreak(_) => String::new(),
        Element::CustomIdentifier(id) => id.identifier().to_string(),
        Element::Heading(heading) => format!("h{} {}", heading.strength(), heading.text()),
        Element::Link(link) => link.link().to_string(),
        Element::Image(image) if image.label().is_empty() => image.link().to_string(),
        Element::Image(image) => image.label().to_string(),
        Element::Paragraph(paragraph) => format!("{} elements", paragraph.len()),
        Element::UnorderedList(list) => format!("{} items", list.len()),
        Element::OrderedList(list) => format!("{} items", list.len()),
        Element::Table(table) => {
            format!("{} columns, {} rows", table.column_count(), table.row_count())
        }
        Element::Row(row) => format!("{} cells", row.len()),
        Element::Column(column) => column.to_text(),
        Element::Cell(cell) => cell.to_text(),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}
