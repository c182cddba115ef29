//! Rendering of failures for the terminal.
//!
//! Errors raised by the library carry `miette` codes and help text. The
//! helpers here find the first such diagnostic in an [`anyhow::Error`] chain
//! and draw it with miette's graphical handler, so the code and help appear
//! alongside the message.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

use crate::builder::CycleError;
use crate::loader::LoadError;
use crate::runner::RunnerError;

/// Return the first error in `err`'s chain that carries diagnostic metadata.
#[must_use]
pub fn find_diagnostic(err: &anyhow::Error) -> Option<&dyn Diagnostic> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<CycleError>()
            .map(|diag| diag as &dyn Diagnostic)
            .or_else(|| {
                cause
                    .downcast_ref::<LoadError>()
                    .map(|diag| diag as &dyn Diagnostic)
            })
            .or_else(|| {
                cause
                    .downcast_ref::<RunnerError>()
                    .map(|diag| diag as &dyn Diagnostic)
            })
    })
}

/// Draw `diagnostic` without colour, including its code and help.
#[must_use]
pub fn render_diagnostic(diagnostic: &dyn Diagnostic) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, diagnostic).is_err() {
        return format!("{diagnostic}\n");
    }
    out
}

/// Render `err` for display on stderr.
///
/// Falls back to the plain context chain when no error in it is a
/// diagnostic.
#[must_use]
pub fn render_error(err: &anyhow::Error) -> String {
    find_diagnostic(err).map_or_else(|| format!("Error: {err:#}\n"), render_diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyGraph;
    use anyhow::Context;
    use rstest::rstest;

    fn cycle_error() -> anyhow::Error {
        let graph = DependencyGraph::new([("a", "b"), ("b", "a")]);
        let err = crate::builder::build(&graph).expect_err("cycle");
        anyhow::Error::new(err)
    }

    #[rstest]
    fn cycle_report_shows_code_and_help() {
        let rendered = render_error(&cycle_error());
        assert!(rendered.contains("construction::builder::cycle"), "{rendered}");
        assert!(rendered.contains("dependency cycle detected: a -> b -> a"), "{rendered}");
        assert!(
            rendered.contains("help: remove or reverse one of the dependencies"),
            "{rendered}"
        );
    }

    #[rstest]
    fn diagnostic_is_found_beneath_context() {
        let err = cycle_error().context("render report");
        let diagnostic = find_diagnostic(&err).expect("diagnostic in chain");
        let code = diagnostic.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("construction::builder::cycle"));
    }

    #[rstest]
    fn load_errors_keep_their_code() {
        let err = crate::loader::from_csv_str("h1,h2\nonly\n")
            .map_err(anyhow::Error::new)
            .context("load dependencies from steps.csv")
            .expect_err("malformed");
        let rendered = render_error(&err);
        assert!(rendered.contains("construction::loader::malformed_record"), "{rendered}");
        assert!(rendered.contains("record on line 2"), "{rendered}");
    }

    #[rstest]
    fn plain_errors_fall_back_to_the_chain() {
        let err = anyhow::anyhow!("disk full").context("write report");
        assert_eq!(render_error(&err), "Error: write report: disk full\n");
    }
}
