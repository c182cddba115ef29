//! Integration tests verifying that log output is written to stderr.
//!
//! These tests exercise the production logging path by invoking the compiled
//! binary and asserting log messages appear on stderr rather than stdout.

use predicates::prelude::*;
use tempfile::tempdir;

/// Verifies that runner errors are logged to stderr.
///
/// The test creates an empty temporary directory (no dependency file) and
/// runs the `steps` subcommand, which fails quickly. The error log should
/// appear on stderr, not stdout.
#[test]
fn main_logs_errors_to_stderr() {
    let temp = tempdir().expect("create temp dir");
    assert_cmd::Command::cargo_bin("construction")
        .expect("binary exists")
        .current_dir(temp.path())
        .arg("steps")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "dependency file 'steps.csv' not found in the current directory",
        ))
        .stdout(predicate::str::is_empty());
}

/// Verbose mode emits debug events on stderr while stdout carries only the
/// report.
#[test]
fn verbose_logs_go_to_stderr() {
    assert_cmd::Command::cargo_bin("construction")
        .expect("binary exists")
        .args(["--verbose", "--file", "tests/data/house_steps.csv", "order"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dependency graph loaded"))
        .stdout(predicate::str::starts_with("Build: ").and(predicate::str::contains("DEBUG").not()));
}
