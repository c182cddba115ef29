//! Input loading helpers.
//!
//! The loader turns tabular text into the ordered `(predecessor, successor)`
//! pairs consumed by [`crate::graph::DependencyGraph`]. Two formats are
//! understood: comma-separated records with a header row, and a small YAML
//! document listing pairs. Step names are used verbatim; the loader never
//! case-folds them.

mod csv;
mod error;
mod yaml;

pub use csv::{from_csv_reader, from_csv_str};
pub use error::LoadError;
pub use yaml::from_yaml_str;

use camino::Utf8Path;
use clap::ValueEnum;
use std::fs;
use tracing::debug;

use crate::graph::DependencyPair;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Comma-separated records with a header row.
    Csv,
    /// YAML document with a `dependencies` list.
    Yaml,
}

impl InputFormat {
    /// Infer the format from a file extension.
    ///
    /// `.yml` and `.yaml` select YAML; anything else is read as CSV.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("yml" | "yaml") => Self::Yaml,
            _ => Self::Csv,
        }
    }

    /// Parse `input` according to this format.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the text does not hold valid records.
    pub fn parse(self, input: &str) -> Result<Vec<DependencyPair>, LoadError> {
        match self {
            Self::Csv => from_csv_str(input),
            Self::Yaml => from_yaml_str(input),
        }
    }
}

/// Load dependency pairs from `path`.
///
/// When `format` is `None` it is inferred with [`InputFormat::from_path`].
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the file cannot be read, or the parse
/// error of the selected format.
pub fn from_path(
    path: &Utf8Path,
    format: Option<InputFormat>,
) -> Result<Vec<DependencyPair>, LoadError> {
    let data = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let selected = format.unwrap_or_else(|| InputFormat::from_path(path));
    let pairs = selected.parse(&data)?;
    debug!(%path, format = ?selected, pairs = pairs.len(), "loaded dependency pairs");
    Ok(pairs)
}
