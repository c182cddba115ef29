//! The house dataset used across the test suites.

use construction::graph::DependencyGraph;
use std::fmt::Write;

/// Dependency pairs for building a small house, in input order.
pub const HOUSE_PAIRS: [(&str, &str); 9] = [
    ("foundation", "walls"),
    ("walls", "roof"),
    ("walls", "windows"),
    ("roof", "finishings"),
    ("windows", "finishings"),
    ("foundation", "plumbing"),
    ("plumbing", "fixtures"),
    ("walls", "electrical"),
    ("electrical", "finishings"),
];

/// The deterministic build order for [`HOUSE_PAIRS`].
pub const HOUSE_ORDER: [&str; 8] = [
    "foundation",
    "plumbing",
    "walls",
    "electrical",
    "fixtures",
    "roof",
    "windows",
    "finishings",
];

/// Graph built from [`HOUSE_PAIRS`].
#[must_use]
pub fn house_graph() -> DependencyGraph {
    DependencyGraph::new(HOUSE_PAIRS)
}

/// [`HOUSE_PAIRS`] as a CSV document, spaced like hand-written input.
#[must_use]
pub fn house_csv() -> String {
    let mut out = String::from("before, after\n");
    for (predecessor, successor) in HOUSE_PAIRS {
        writeln!(out, "{predecessor}, {successor}").expect("write to String");
    }
    out
}

/// [`HOUSE_PAIRS`] as a YAML document.
#[must_use]
pub fn house_yaml() -> String {
    let mut out = String::from("dependencies:\n");
    for (predecessor, successor) in HOUSE_PAIRS {
        writeln!(out, "  - [{predecessor}, {successor}]").expect("write to String");
    }
    out
}
