//! Typed element trees for Markdown documents
//!
//!     This crate parses Markdown into a small, closed set of typed elements, lets callers query
//!     and walk that tree, and builds Markdown text back from code. Parsing itself is left to
//!     comrak; this crate only maps comrak's node tree onto its own element model.
//!
//!     This is a pure lib: it powers mdtree-cli but assumes no shell environment, so no code here
//!     prints, reads env vars or installs a log subscriber.
//!
//!     The file structure :
//!     .
//!     ├── elements                # Element enum, narrowing, clone-and-filter
//!     │   ├── inline.rs           # Text, LineBreak, CustomIdentifier, Link, Image
//!     │   ├── block.rs            # Heading, Paragraph, lists
//!     │   └── table.rs            # Table, Row, Column, Cell, StringTable
//!     ├── options.rs              # Per-parse options
//!     ├── parser.rs               # comrak AST → elements
//!     ├── document.rs             # ParsedDocument queries
//!     ├── processor.rs            # Typed visitors with descent control
//!     ├── builder.rs              # Markdown text builder
//!     ├── treeviz.rs              # One line per element visualization
//!     └── error.rs
//!
//! Parsing
//!
//!     Parsing never fails: comrak accepts any input and whatever it recognizes is mapped. Two
//!     options change the shape of the result (see [`ParseOptions`]): paragraph wrapping, and the
//!     lifting of `{token}` custom identifiers out of text.
//!
//!     ```ignore
//!     let doc = mdtree::parse_configured("# Title{#intro}", |options| {
//!         options.enable_parse_custom_id_tokens()
//!     });
//!     let heading = doc.find_first::<Heading>().unwrap();
//!     assert_eq!(heading.text(), "Title");
//!     assert_eq!(heading.custom_ids(), vec!["intro"]);
//!     ```
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # includes markdown/
//!     └── markdown
//!         ├── parsing.rs
//!         ├── processing.rs
//!         ├── building.rs         # builder → parse round trips
//!         └── treeviz.rs          # insta snapshots
//!
//!     Rust does not discover tests in subdirectories, so they are included from tests/lib.rs,
//!     which is then the only integration test target.

pub mod builder;
pub mod document;
pub mod elements;
pub mod error;
pub mod options;
pub mod parser;
pub mod processor;
pub mod treeviz;

pub use builder::{
    DocumentBuilder, HeadingStrength, MarkdownDocument, ParagraphBuilder, TextBuilder,
};
pub use document::ParsedDocument;
pub use elements::{Element, ElementKind, StringTable};
pub use error::{MdTreeError, Result};
pub use options::ParseOptions;
pub use processor::{Processor, ProcessorControl, Visitors};

use tracing::debug;

/// Parse with default options.
pub fn parse(text: &str) -> ParsedDocument {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> ParsedDocument {
    let elements = parser::parse_elements(text, options);
    debug!(
        elements = elements.len(),
        wrap_into_paragraphs = options.wrap_into_paragraphs(),
        parse_custom_id_tokens = options.parse_custom_id_tokens(),
        "parsed markdown document"
    );
    ParsedDocument::new(elements)
}

/// Parse with options derived from the defaults by `configure`.
pub fn parse_configured<F>(text: &str, configure: F) -> ParsedDocument
where
    F: FnOnce(ParseOptions) -> ParseOptions,
{
    parse_with(text, &configure(ParseOptions::default()))
}

/// A document builder using `"\n"` line breaks.
pub fn builder() -> DocumentBuilder {
    DocumentBuilder::new()
}
