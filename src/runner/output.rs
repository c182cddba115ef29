//! Stdout helpers for the runner.

use anyhow::{Context, Result};
use std::io::{self, Write};

fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

fn write_all_ignoring_broken_pipe(writer: &mut impl Write, buf: &[u8]) -> io::Result<()> {
    match writer.write_all(buf) {
        Ok(()) => Ok(()),
        Err(err) if is_broken_pipe(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

fn flush_ignoring_broken_pipe(writer: &mut impl Write) -> io::Result<()> {
    match writer.flush() {
        Ok(()) => Ok(()),
        Err(err) if is_broken_pipe(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Write `content` to `writer`, treating a closed pipe as success.
pub(super) fn write_report(writer: &mut impl Write, content: &str) -> Result<()> {
    write_all_ignoring_broken_pipe(writer, content.as_bytes()).context("write report")?;
    flush_ignoring_broken_pipe(writer).context("flush report")?;
    Ok(())
}

pub(super) fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, content)
}
