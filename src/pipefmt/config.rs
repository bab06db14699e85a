//! Configuration loading
//!
//! `defaults/pipefmt.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. User files are
//! layered on top via [`Loader`] before deserializing into [`PipefmtConfig`].

use super::error::{Error, Result};
use super::formatter::FormatRules;
use super::output::OutputFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/pipefmt.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipefmtConfig {
    pub format: FormatSection,
    pub output: OutputSection,
}

/// Raw `[format]` table. Single characters are kept as strings here and
/// checked in [`PipefmtConfig::rules`].
#[derive(Debug, Clone, Deserialize)]
pub struct FormatSection {
    pub delimiter: String,
    pub separator: String,
    pub hyphen: String,
    pub quote: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    pub format: String,
}

impl PipefmtConfig {
    pub fn rules(&self) -> Result<FormatRules> {
        Ok(FormatRules {
            delimiter: single_char("format.delimiter", &self.format.delimiter)?,
            separator: self.format.separator.clone(),
            hyphen: single_char("format.hyphen", &self.format.hyphen)?,
            quote: single_char("format.quote", &self.format.quote)?,
        })
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }
}

fn single_char(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidConfig(format!(
            "{key} must be exactly one character, got {value:?}"
        ))),
    }
}

/// Layers user overrides over the built-in defaults.
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PipefmtConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
