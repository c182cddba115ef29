//! Test utilities shared by the integration suites.
//!
//! Provides the reference house dataset and helpers that write dependency
//! files into temporary directories.

pub mod fixtures;

pub use fixtures::{HOUSE_ORDER, HOUSE_PAIRS, house_csv, house_graph, house_yaml};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// Returns the directory guard and the UTF-8 path of the written file.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created.
pub fn write_input(name: &str, contents: &str) -> Result<(TempDir, Utf8PathBuf)> {
    let dir = TempDir::new().context("create temp dir")?;
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .map_err(|path| anyhow::anyhow!("temp dir is not UTF-8: {}", path.display()))?;
    let path = root.join(name);
    fs::write(&path, contents).with_context(|| format!("write {path}"))?;
    Ok((dir, path))
}

/// Render pairs as CSV with a header row.
#[must_use]
pub fn csv_from_pairs(pairs: &[(&str, &str)]) -> String {
    let mut out = String::from("before,after\n");
    for (predecessor, successor) in pairs {
        out.push_str(predecessor);
        out.push(',');
        out.push_str(successor);
        out.push('\n');
    }
    out
}
