//! Per-parse options.

/// Options for a single parse call.
///
/// ```ignore
/// let options = ParseOptions::default()
///     .enable_wrap_into_paragraphs()
///     .enable_parse_custom_id_tokens();
/// let doc = mdtree::parse_with("# Title{#intro}", &options);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    wrap_into_paragraphs: bool,
    parse_custom_id_tokens: bool,
}

impl ParseOptions {
    /// Emit blank-line delimited paragraphs as [`Paragraph`](crate::elements::Paragraph)
    /// elements instead of flattening their content into the enclosing sequence.
    pub fn enable_wrap_into_paragraphs(self) -> Self {
        self.enable_wrap_into_paragraphs_with(true)
    }

    pub fn enable_wrap_into_paragraphs_with(mut self, wrap_into_paragraphs: bool) -> Self {
        self.wrap_into_paragraphs = wrap_into_paragraphs;
        self
    }

    /// Lift `{token}` patterns out of literal text as
    /// [`CustomIdentifier`](crate::elements::CustomIdentifier) elements.
    pub fn enable_parse_custom_id_tokens(self) -> Self {
        self.enable_parse_custom_id_tokens_with(true)
    }

    pub fn enable_parse_custom_id_tokens_with(mut self, parse_custom_id_tokens: bool) -> Self {
        self.parse_custom_id_tokens = parse_custom_id_tokens;
        self
    }

    pub fn wrap_into_paragraphs(&self) -> bool {
        self.wrap_into_paragraphs
    }

    pub fn parse_custom_id_tokens(&self) -> bool {
        self.parse_custom_id_tokens
    }
}
