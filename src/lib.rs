//! Construction build-order library.
//!
//! Models a construction project as a graph of named steps linked by
//! `(predecessor, successor)` pairs and computes a linear build order with a
//! deterministic topological sort. The [`loader`] and [`runner`] modules wrap
//! the core for command-line use, and [`diagnostics`] renders their failures.

pub mod builder;
pub mod cli;
pub mod diagnostics;
pub mod graph;
pub mod loader;
pub mod report;
pub mod runner;
