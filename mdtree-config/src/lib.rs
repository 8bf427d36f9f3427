//! Shared configuration loader for the mdtree toolchain.
//!
//! `defaults/mdtree.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdTreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdtree::ParseOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtree.default.toml");

/// Top-level configuration consumed by mdtree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdTreeConfig {
    pub parse: ParseConfig,
    pub inspect: InspectConfig,
    pub builder: BuilderConfig,
}

/// Mirrors the per-parse options of the library.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub wrap_into_paragraphs: bool,
    pub parse_custom_id_tokens: bool,
}

impl From<&ParseConfig> for ParseOptions {
    fn from(config: &ParseConfig) -> Self {
        ParseOptions::default()
            .enable_wrap_into_paragraphs_with(config.wrap_into_paragraphs)
            .enable_parse_custom_id_tokens_with(config.parse_custom_id_tokens)
    }
}

impl From<ParseConfig> for ParseOptions {
    fn from(config: ParseConfig) -> Self {
        ParseOptions::from(&config)
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_bold: bool,
    pub strip_custom_ids: bool,
}

/// Controls markdown emitted through the document builder.
#[derive(Debug, Clone, Deserialize)]
pub struct BuilderConfig {
    pub line_break: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdTreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdTreeConfig, ConfigError> {
    Loader::new().build()
}
