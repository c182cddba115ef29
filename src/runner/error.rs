//! Error types for the runner module.
//!
//! This submodule isolates derive-macro-affected code to scope lint suppressions
//! narrowly. The `unused_assignments` lint fires in some Rust versions due to
//! thiserror/miette derive macro expansion.

// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised during command execution.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The dependency file does not exist at the expected path.
    #[error("dependency file '{file_name}' not found in {directory}")]
    #[diagnostic(
        code(construction::runner::input_not_found),
        help("pass the dependency file with --file, or use -C to change directory")
    )]
    InputNotFound {
        /// Name of the expected file (e.g., "steps.csv").
        file_name: String,
        /// Directory description (e.g., "the current directory").
        directory: String,
        /// The path that was attempted.
        path: Utf8PathBuf,
    },

    /// A path supplied on the command line is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    #[diagnostic(code(construction::runner::non_utf8_path))]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },
}
