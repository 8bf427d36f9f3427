//! CLI-specific transforms
//!
//! This module defines the views `mdtree inspect` can produce from a markdown file.
//! Every transform parses the source into an element tree first; they only differ in
//! how that tree is rendered:
//!
//! - `element-treeviz`: Tree visualization with Unicode icons (default)
//! - `element-json`: JSON representation of the element tree
//! - `custom-ids`: Every custom identifier in document order, one per line
//! - `tables`: Each table as tab separated text, tables separated by a blank line
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `strip-custom-ids`: When set to "true", custom identifiers are removed before rendering
//! - `show-bold`: When set to "true", bold text is marked in the treeviz output
//!
//! Example: `mdtree inspect notes.md element-treeviz --extra-show-bold`

use mdtree::elements::{CustomIdentifier, StringTable, Table};
use mdtree::treeviz::to_treeviz_str_with_params;
use mdtree::{DocumentBuilder, MarkdownDocument, ParseOptions, ParsedDocument};
use std::cell::RefCell;
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["element-treeviz", "element-json", "custom-ids", "tables"];

pub const DEFAULT_TRANSFORM: &str = "element-treeviz";

/// Execute a named transform on a source text with optional extra parameters
///
/// # Arguments
///
/// * `source` - The markdown text to transform
/// * `transform_name` - The transform to apply (e.g., "element-json")
/// * `options` - Parse options, usually taken from the configuration
/// * `extra_params` - Optional parameters for the transform
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &ParseOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let doc = mdtree::parse_with(source, options);
    let doc = if is_enabled(extra_params, "strip-custom-ids") {
        doc.clear_custom_tokens()
    } else {
        doc
    };

    match transform_name {
        "element-treeviz" => Ok(to_treeviz_str_with_params(&doc, extra_params)),
        "element-json" => serde_json::to_string_pretty(&doc)
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "custom-ids" => Ok(collect_custom_ids(&doc)
            .into_iter()
            .map(|id| id + "\n")
            .collect()),
        "tables" => Ok(collect_tables(&doc)
            .iter()
            .map(string_table_to_tsv)
            .collect::<Vec<_>>()
            .join("\n")),
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

/// Re-emit every table of `source` as normalized markdown.
pub fn tables_to_markdown(source: &str, options: &ParseOptions, line_break: &str) -> MarkdownDocument {
    let doc = mdtree::parse_with(source, options);
    let tables = collect_tables(&doc);

    let mut builder = DocumentBuilder::new();
    builder.with_line_break(line_break);
    for table in &tables {
        builder.add_table(table);
    }
    builder.build()
}

fn is_enabled(params: &HashMap<String, String>, key: &str) -> bool {
    params.get(key).map(|value| value == "true").unwrap_or(false)
}

fn collect_custom_ids(doc: &ParsedDocument) -> Vec<String> {
    let ids = RefCell::new(Vec::new());
    doc.new_processor()
        .add_plain_visitor(|id: &CustomIdentifier| {
            ids.borrow_mut().push(id.identifier().to_string())
        })
        .process();
    ids.into_inner()
}

fn collect_tables(doc: &ParsedDocument) -> Vec<StringTable> {
    let tables = RefCell::new(Vec::new());
    doc.new_processor()
        .add_plain_visitor(|table: &Table| tables.borrow_mut().push(table.as_string_table()))
        .process();
    tables.into_inner()
}

fn string_table_to_tsv(table: &StringTable) -> String {
    let mut output = table.column_titles().join("\t");
    output.push('\n');
    for row in table.rows() {
        output.push_str(&row.join("\t"));
        output.push('\n');
    }
    output
}
