//! Markdown tests
//!
//! Parsing into elements, processing element trees, building markdown text and rendering
//! treeviz output.

mod building;
mod parsing;
mod processing;
