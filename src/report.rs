//! Rendering of graph views and build orders.
//!
//! A [`Report`] collects the requested [`Section`]s for a graph and renders
//! them as plain text (one line per section) or as a single JSON object.
//! Sets and maps are rendered in lexicographic order, so output is stable
//! for snapshot tests.

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use crate::builder::{self, BuildOrder, CycleError};
use crate::graph::{Adjacency, DependencyGraph, DependencyPair};

/// Output encodings for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A JSON object keyed by section.
    Json,
}

/// A single part of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Distinct steps.
    Steps,
    /// Dependency pairs in input order.
    Dependencies,
    /// Step to predecessor map.
    Graph,
    /// Computed build order.
    Build,
}

/// Selected views of a dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<Vec<DependencyPair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<Adjacency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<BuildOrder>,
}

impl Report {
    /// Collect `sections` from `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when [`Section::Build`] is requested and the
    /// graph has no valid order. No partial report is produced in that case.
    pub fn new(graph: &DependencyGraph, sections: &[Section]) -> Result<Self, CycleError> {
        match Self::collect(graph, sections) {
            (report, None) => Ok(report),
            (_, Some(err)) => Err(err),
        }
    }

    /// Collect `sections` from `graph`, keeping every section that succeeds.
    ///
    /// When the build order fails, the other requested sections are still
    /// filled in and the [`CycleError`] is returned alongside them.
    #[must_use]
    pub fn collect(graph: &DependencyGraph, sections: &[Section]) -> (Self, Option<CycleError>) {
        let mut report = Self::default();
        let mut failure = None;
        for section in sections {
            match section {
                Section::Steps => report.steps = Some(graph.steps()),
                Section::Dependencies => {
                    report.dependencies = Some(graph.dependency_pairs().to_vec());
                }
                Section::Graph => report.graph = Some(graph.adjacency()),
                Section::Build => match builder::build(graph) {
                    Ok(order) => report.build = Some(order),
                    Err(err) => failure = Some(err),
                },
            }
        }
        (report, failure)
    }

    /// Whether no section was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_none()
            && self.dependencies.is_none()
            && self.graph.is_none()
            && self.build.is_none()
    }

    /// Render the report in the chosen format.
    ///
    /// Text output ends with a newline after every section.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialisation fails.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

fn write_line(f: &mut Formatter<'_>, label: &str, body: &str) -> fmt::Result {
    if body.is_empty() {
        writeln!(f, "{label}:")
    } else {
        writeln!(f, "{label}: {body}")
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(steps) = &self.steps {
            write_line(f, "Steps", &steps.iter().join(", "))?;
        }
        if let Some(pairs) = &self.dependencies {
            write_line(f, "Dependencies", &pairs.iter().join(", "))?;
        }
        if let Some(graph) = &self.graph {
            let body = graph
                .iter()
                .map(|(step, predecessors)| {
                    format!("{step} <- {{{}}}", predecessors.iter().join(", "))
                })
                .join("; ");
            write_line(f, "Graph", &body)?;
        }
        if let Some(order) = &self.build {
            write_line(f, "Build", &order.to_string())?;
        }
        Ok(())
    }
}
