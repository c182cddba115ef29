//! Error types for the loader module.

// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use camino::Utf8PathBuf;
use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Errors raised while turning input text into dependency pairs.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read {path}")]
    #[diagnostic(code(construction::loader::read))]
    Read {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A streamed record could not be read.
    #[error("failed to read record on line {line}")]
    #[diagnostic(code(construction::loader::io))]
    Io {
        /// One-based line number of the failing record.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A record carried fewer than two fields.
    #[error("record on line {line} has {fields} field(s); expected at least two")]
    #[diagnostic(
        code(construction::loader::malformed_record),
        help("each record must read `predecessor,successor`")
    )]
    MalformedRecord {
        /// One-based line number of the record.
        line: usize,
        /// Number of fields found.
        fields: usize,
    },

    /// A YAML entry carried fewer than two steps.
    #[error("dependency entry {entry} has {fields} field(s); expected at least two")]
    #[diagnostic(
        code(construction::loader::malformed_entry),
        help("each entry must read `[predecessor, successor]`")
    )]
    MalformedEntry {
        /// One-based position of the entry in the `dependencies` list.
        entry: usize,
        /// Number of fields found.
        fields: usize,
    },

    /// The YAML document did not match the expected shape.
    #[error("invalid YAML dependency document: {message}")]
    #[diagnostic(
        code(construction::loader::yaml),
        help("expected `dependencies:` followed by a list of `[predecessor, successor]` pairs")
    )]
    Yaml {
        /// Parser message, including the location when known.
        message: String,
    },
}
