// Integration tests for the codescore CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument parsing, exit codes and help output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the codescore binary.
fn codescore() -> Command {
    Command::cargo_bin("codescore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    codescore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("codescore"));
}

#[test]
fn cli_help_flag() {
    codescore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Static analysis quality scoring"));
}

#[test]
fn analyze_requires_path() {
    codescore()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_out_of_range_min_score() {
    codescore()
        .args(["analyze", "a.py", "--min-score", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("101"));
}

#[test]
fn stats_rejects_sarif_format() {
    // SARIF only describes a single analysis
    codescore()
        .args(["stats", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    codescore()
        .args(["-q", "-v", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
