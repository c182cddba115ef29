//! Error types for the builder module.

// thiserror/miette derive expansion trips `unused_assignments` on some
// toolchains; `#[expect]` would fail on the others.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use thiserror::Error;

/// Raised when the dependency pairs admit no valid build order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "dependency cycle detected: {} (unresolved steps: {})",
    .cycle.join(" -> "),
    .unresolved.join(", ")
)]
#[diagnostic(
    code(construction::builder::cycle),
    help("remove or reverse one of the dependencies along the reported cycle")
)]
pub struct CycleError {
    /// Steps that could not be ordered, sorted by name.
    ///
    /// Each of them either lies on a cycle or depends on one.
    pub unresolved: Vec<String>,
    /// One concrete loop, starting and ending at its smallest step.
    pub cycle: Vec<String>,
}

impl CycleError {
    /// Whether `step` could not be placed in the build order.
    #[must_use]
    pub fn involves(&self, step: &str) -> bool {
        self.unresolved.iter().any(|candidate| candidate == step)
    }
}
