//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `gridkata` binary to verify that
//! argument parsing, help text, and the drill runs work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("gridkata").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridkata"));
}

// ---------------------------------------------------------------------------
// template subcommand
// ---------------------------------------------------------------------------

#[test]
fn template_prints_default_config() {
    cmd()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fill_shape\""))
        .stdout(predicate::str::contains("\"overwrite_stride\": 15"));
}

// ---------------------------------------------------------------------------
// run subcommand
// ---------------------------------------------------------------------------

#[test]
fn run_defaults_emits_all_drills() {
    cmd()
        .arg("run")
        .assert()
        .success()
        .stderr(predicate::str::contains("No config provided"))
        .stdout(predicate::str::contains("0.05"))
        .stdout(predicate::str::contains("15"));
}

#[test]
fn run_single_drill_skips_the_others() {
    cmd()
        .args(["run", "--drill", "sequence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.05"))
        .stdout(predicate::str::contains("[[").not());
}

#[test]
fn run_unknown_drill_errors() {
    cmd()
        .args(["run", "--drill", "bogus"])
        .assert()
        .failure();
}

#[test]
fn run_nonexistent_config_errors() {
    cmd()
        .args(["run", "/nonexistent/config.json"])
        .assert()
        .failure();
}

#[test]
fn run_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drills.json");
    std::fs::write(&path, r#"{"seq_len": 10, "overwrite_stride": 3}"#).unwrap();

    cmd()
        .args(["run", "--drill", "sequence", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config"));
}

#[test]
fn run_writes_sequence_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequence.csv");

    cmd()
        .args([
            "run",
            "--drill",
            "sequence",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("index,value"));
    assert!(contents.contains("195,15"));
}
