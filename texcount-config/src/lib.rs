//! Configuration loader for texcount.
//!
//! `defaults/texcount.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TexcountConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use texcount::tex::counting::CountOptions;
use texcount::tex::formats::{FormatError, OutputFormat};

const DEFAULT_TOML: &str = include_str!("../defaults/texcount.default.toml");

/// Top-level configuration consumed by texcount.
#[derive(Debug, Clone, Deserialize)]
pub struct TexcountConfig {
    pub counting: CountingConfig,
    pub output: OutputConfig,
}

/// The name sets steering the word counter.
#[derive(Debug, Clone, Deserialize)]
pub struct CountingConfig {
    pub exclude_environments: Vec<String>,
    pub include_macro_arguments: Vec<String>,
    pub macro_as_word: Vec<String>,
}

impl CountingConfig {
    pub fn to_options(&self) -> CountOptions {
        CountOptions::new()
            .exclude_environments(self.exclude_environments.iter().cloned())
            .include_arguments_of(self.include_macro_arguments.iter().cloned())
            .macros_as_words(self.macro_as_word.iter().cloned())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl OutputConfig {
    pub fn format(&self) -> Result<OutputFormat, FormatError> {
        self.format.parse()
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TexcountConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TexcountConfig, ConfigError> {
    Loader::new().build()
}
