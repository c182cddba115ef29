//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the dependency file, builds the graph, and prints the sections the
//! selected command asks for.

mod error;
mod output;
mod path_helpers;

pub use error::RunnerError;

use crate::builder::CycleError;
use crate::cli::Cli;
use crate::graph::DependencyGraph;
use crate::loader;
use crate::report::Report;
use anyhow::{Context, Result};
use tracing::{debug, info};

use path_helpers::{ensure_input_exists, resolve_input_path};

/// Load the dependency graph named by the CLI options.
///
/// # Errors
///
/// Returns an error if the input path is invalid, missing, or holds
/// malformed records.
pub fn load_graph(cli: &Cli) -> Result<DependencyGraph> {
    let path = resolve_input_path(cli)?;
    ensure_input_exists(cli, &path)?;
    let pairs = loader::from_path(&path, cli.format)
        .with_context(|| format!("load dependencies from {path}"))?;
    let graph = DependencyGraph::new(pairs);
    info!(
        %path,
        pairs = graph.dependency_pairs().len(),
        steps = graph.step_count(),
        "dependency graph loaded",
    );
    Ok(graph)
}

/// Render the output of `command` for `graph`.
///
/// Sections that do not need a build order are rendered even when the graph
/// has a cycle; the [`CycleError`] is handed back next to them. An empty
/// string is returned when nothing could be rendered.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render(cli: &Cli, graph: &DependencyGraph) -> Result<(String, Option<CycleError>)> {
    let command = cli.command.unwrap_or_default();
    debug!(?command, output = ?cli.output, "rendering report");
    let (report, failure) = Report::collect(graph, command.sections());
    let rendered = if report.is_empty() {
        String::new()
    } else {
        report.render(cli.output)?
    };
    Ok((rendered, failure))
}

/// Execute the parsed [`Cli`] command.
///
/// # Errors
///
/// Returns an error if loading fails, the dependencies contain a cycle while
/// a build order was requested, or writing to stdout fails. Sections printed
/// before a cycle is reported stay on stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let graph = load_graph(cli)?;
    let (rendered, failure) = render(cli, &graph)?;
    if !rendered.is_empty() {
        output::write_stdout(&rendered)?;
    }
    failure.map_or(Ok(()), |err| Err(err.into()))
}
