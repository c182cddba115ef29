//! Path resolution helpers for the runner module.
//!
//! Centralises input path logic so the main runner module stays focused on
//! command dispatch.

use crate::cli::Cli;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;

use super::RunnerError;

fn to_utf8(path: PathBuf) -> Result<Utf8PathBuf, RunnerError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| RunnerError::NonUtf8Path {
        path: path.display().to_string(),
    })
}

/// Determine the input path respecting the CLI's directory option.
///
/// Absolute `--file` values are used as given.
///
/// # Errors
/// Returns an error when the CLI `file` or `directory` paths are not valid UTF-8.
pub(super) fn resolve_input_path(cli: &Cli) -> Result<Utf8PathBuf, RunnerError> {
    let file = to_utf8(cli.file.clone())?;
    match &cli.directory {
        Some(dir) if file.is_relative() => Ok(to_utf8(dir.clone())?.join(&file)),
        _ => Ok(file),
    }
}

pub(super) fn ensure_input_exists(cli: &Cli, path: &Utf8Path) -> Result<(), RunnerError> {
    if path.as_std_path().exists() {
        return Ok(());
    }
    let file_name = path.file_name().unwrap_or(path.as_str()).to_owned();
    let directory = match (&cli.directory, path.parent()) {
        (Some(_), Some(parent)) if !parent.as_str().is_empty() => format!("directory '{parent}'"),
        _ => "the current directory".to_owned(),
    };
    Err(RunnerError::InputNotFound {
        file_name,
        directory,
        path: path.to_owned(),
    })
}
