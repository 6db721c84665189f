//! Output formats
//!
//!     Every way the tool can present a source: the word count itself, the parsed tree
//!     (treeviz, JSON, YAML) and the raw token stream (JSON, simple). Formats are named
//!     `<stage>-<format>`, except `count`.

pub mod tokens;
pub mod treeviz;

use crate::tex::ast::snapshot_from_document;
use crate::tex::counting::{count_words, CountOptions};
use crate::tex::lexing::collect_tokens;
use crate::tex::parsing::{parse, SyntaxError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use tokens::{to_token_json, to_token_simple};
pub use treeviz::to_treeviz_str;

/// Errors that can occur while producing an output format
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (see --list-formats)")]
    UnknownFormat(String),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Count,
    AstTreeviz,
    AstJson,
    AstYaml,
    TokenJson,
    TokenSimple,
}

impl OutputFormat {
    /// Get all available formats
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Count,
            OutputFormat::AstTreeviz,
            OutputFormat::AstJson,
            OutputFormat::AstYaml,
            OutputFormat::TokenJson,
            OutputFormat::TokenSimple,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Count => "count",
            OutputFormat::AstTreeviz => "ast-treeviz",
            OutputFormat::AstJson => "ast-json",
            OutputFormat::AstYaml => "ast-yaml",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::TokenSimple => "token-simple",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Count => "Number of prose words",
            OutputFormat::AstTreeviz => "Visual tree representation with indentation and icons",
            OutputFormat::AstJson => "Tree snapshot as JSON",
            OutputFormat::AstYaml => "Tree snapshot as YAML",
            OutputFormat::TokenJson => "Token stream as JSON",
            OutputFormat::TokenSimple => "Token stream, one token per line",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Render `source` in the given format. Counting uses `options`; the other formats ignore it.
pub fn render(
    source: &str,
    format: OutputFormat,
    options: &CountOptions,
) -> Result<String, FormatError> {
    tracing::debug!(format = %format, bytes = source.len(), "rendering");
    match format {
        OutputFormat::Count => {
            let document = parse(source)?;
            Ok(format!("{}\n", count_words(&document, options)))
        }
        OutputFormat::AstTreeviz => Ok(to_treeviz_str(&parse(source)?)),
        OutputFormat::AstJson => {
            let snapshot = snapshot_from_document(&parse(source)?);
            Ok(format!("{}\n", serde_json::to_string_pretty(&snapshot)?))
        }
        OutputFormat::AstYaml => {
            let snapshot = snapshot_from_document(&parse(source)?);
            Ok(serde_yaml::to_string(&snapshot)?)
        }
        OutputFormat::TokenJson => to_token_json(&collect_tokens(source)),
        OutputFormat::TokenSimple => Ok(to_token_simple(&collect_tokens(source))),
    }
}
