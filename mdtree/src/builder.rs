//! Document builder
//!
//!     Builds markdown text line by line. Every `add_*` call appends one or more complete lines,
//!     each terminated by the configured line break (`"\n"` unless changed with
//!     [`DocumentBuilder::with_line_break`]). The builder never escapes the text it is given, the
//!     one exception being `|` inside table cells, which would otherwise split the cell.
//!
//!     ```ignore
//!     let markdown = mdtree::builder()
//!         .add_heading("Report")
//!         .add_paragraph(|paragraph| {
//!             paragraph.add_text("first line").add_text("second line");
//!         })
//!         .add_table(&table)
//!         .build();
//!     let doc = markdown.parse();
//!     ```

use crate::document::ParsedDocument;
use crate::elements::StringTable;
use crate::error::{MdTreeError, Result};
use crate::options::ParseOptions;
use std::fmt;
use std::path::Path;
use tracing::debug;

const DEFAULT_LINE_BREAK: &str = "\n";
const PIPE: &str = "|";
const PIPE_REPLACEMENT: &str = " ";

/// Heading levels accepted by [`DocumentBuilder::add_heading_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeadingStrength {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingStrength {
    /// Number of `#` characters, 1 to 6.
    pub fn strength(self) -> usize {
        match self {
            HeadingStrength::H1 => 1,
            HeadingStrength::H2 => 2,
            HeadingStrength::H3 => 3,
            HeadingStrength::H4 => 4,
            HeadingStrength::H5 => 5,
            HeadingStrength::H6 => 6,
        }
    }
}

/// Operations shared by the document and the paragraph scope.
pub trait TextBuilder {
    /// Append `text` as a raw line.
    fn add_text(&mut self, text: &str) -> &mut Self;

    fn add_texts<I, S>(&mut self, texts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.add_text(text.as_ref());
        }
        self
    }

    /// Call `f` once per item, in order, with this builder.
    fn process<I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(I::Item, &mut Self),
    {
        for item in items {
            f(item, self);
        }
        self
    }
}

/// Accumulates markdown text.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    buffer: String,
    line_break: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        DocumentBuilder {
            buffer: String::new(),
            line_break: DEFAULT_LINE_BREAK.to_string(),
        }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line break sequence used for every line appended from now on.
    pub fn with_line_break(&mut self, line_break: impl Into<String>) -> &mut Self {
        self.line_break = line_break.into();
        self
    }

    /// A level 1 heading.
    pub fn add_heading(&mut self, heading: &str) -> &mut Self {
        self.add_heading_with(HeadingStrength::H1, heading)
    }

    pub fn add_heading_with(&mut self, strength: HeadingStrength, heading: &str) -> &mut Self {
        let line = format!("{} {heading}", "#".repeat(strength.strength()));
        self.append_line(&line)
    }

    /// `[label](link "tooltip")`, or `[label](link)` without a tooltip.
    ///
    /// Quotes and backslashes in the tooltip are backslash-escaped.
    pub fn add_link(&mut self, label: &str, link: &str, tooltip: Option<&str>) -> &mut Self {
        let line = match tooltip {
            Some(tooltip) => format!("[{label}]({link} \"{}\")", escape_title(tooltip)),
            None => format!("[{label}]({link})"),
        };
        self.append_line(&line)
    }

    /// A blank-line delimited block whose lines are added through the paragraph builder.
    pub fn add_paragraph<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ParagraphBuilder<'_>),
    {
        self.append_line_break();
        build(&mut ParagraphBuilder { document: self });
        self.append_line_break()
    }

    /// A pipe table preceded by a blank line.
    pub fn add_table(&mut self, table: &StringTable) -> &mut Self {
        self.append_line_break();

        let titles: Vec<String> = table
            .column_titles()
            .iter()
            .map(|title| title.replace(PIPE, PIPE_REPLACEMENT))
            .collect();
        let separators: Vec<String> = table
            .column_titles()
            .iter()
            .map(|title| "-".repeat(title.chars().count().max(3)))
            .collect();

        self.append_line(&pipe_row(&titles));
        self.append_line(&pipe_row(&separators));
        for row in table.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.replace(PIPE, PIPE_REPLACEMENT))
                .collect();
            self.append_line(&pipe_row(&cells));
        }
        self
    }

    /// A line holding a single backslash.
    pub fn add_line_break(&mut self) -> &mut Self {
        self.append_line("\\")
    }

    /// Hand the builder to `f`, keeping the chain going.
    pub fn apply_to<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(self);
        self
    }

    pub fn apply_to_if<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Snapshot of the text accumulated so far.
    pub fn build(&self) -> MarkdownDocument {
        MarkdownDocument {
            text: self.buffer.clone(),
        }
    }

    fn append_line(&mut self, line: &str) -> &mut Self {
        self.buffer.push_str(line);
        self.append_line_break()
    }

    fn append_line_break(&mut self) -> &mut Self {
        self.buffer.push_str(&self.line_break);
        self
    }
}

impl TextBuilder for DocumentBuilder {
    fn add_text(&mut self, text: &str) -> &mut Self {
        self.append_line(text)
    }
}

fn escape_title(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}

fn pipe_row(cells: &[String]) -> String {
    format!("{PIPE}{}{PIPE}", cells.join(PIPE))
}

/// The nested scope handed out by [`DocumentBuilder::add_paragraph`].
#[derive(Debug)]
pub struct ParagraphBuilder<'b> {
    document: &'b mut DocumentBuilder,
}

impl TextBuilder for ParagraphBuilder<'_> {
    fn add_text(&mut self, text: &str) -> &mut Self {
        self.document.add_text(text);
        self
    }
}

/// Markdown text produced by a [`DocumentBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    text: String,
}

impl MarkdownDocument {
    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Parse the text with default options.
    pub fn parse(&self) -> ParsedDocument {
        crate::parse(&self.text)
    }

    pub fn parse_with(&self, options: &ParseOptions) -> ParsedDocument {
        crate::parse_with(&self.text, options)
    }

    /// Write the text byte for byte, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<&Self> {
        let path = path.as_ref();
        std::fs::write(path, &self.text).map_err(|source| MdTreeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = self.text.len(), "wrote markdown document");
        Ok(self)
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for MarkdownDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
