//! End-to-end CLI tests for logweave.
//!
//! These tests verify the complete workflow by running the actual binary
//! against real directories and checking artifacts on disk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const GENERAL: &str = r#"[
  {"author":"Alice","timestamp":1700000000000,"content":"hello world","reaction_counts":"👍2"},
  {"author":"Bob","timestamp":1700000060000,"content":"hey Alice"},
  {"author":"Alice","timestamp":1700000120000,"content":"shipping the release"}
]"#;

const RANDOM: &str = r#"[
  {"author":"Carol","timestamp":1700000300000,"content":"lunch?"},
]"#;

/// Creates a temporary input directory with a pair of export files.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("general.json"), GENERAL).unwrap();
    fs::write(dir.path().join("random.json"), RANDOM).unwrap();
    dir
}

fn logweave() -> Command {
    Command::cargo_bin("logweave").expect("binary exists")
}

fn read_output(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join("output_logs").join(name)).unwrap()
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_converts_every_file_to_three_formats() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing 2 JSON files"))
        .stdout(predicate::str::contains("Done!"));

    let out = dir.path().join("output_logs");
    for name in ["general", "random"] {
        for ext in ["html", "md", "csv"] {
            assert!(out.join(format!("{name}.{ext}")).is_file(), "missing {name}.{ext}");
        }
    }
}

#[test]
fn test_html_uses_default_theme() {
    let dir = setup_fixtures();
    logweave().arg(dir.path()).assert().success();

    let html = read_output(&dir, "general.html");
    assert!(html.contains("<style>"));
    assert!(html.contains("background-color: #121212"));
    assert!(html.contains("hello world"));
}

#[test]
fn test_trailing_comma_file_converts() {
    let dir = setup_fixtures();
    logweave().arg(dir.path()).assert().success();

    // random.json carries a trailing comma; Carol must still come through
    let csv = read_output(&dir, "random.csv");
    assert!(csv.contains("Carol"));
    assert!(!dir.path().join("output_logs/error_log.txt").exists());
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_author_filter() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--author", "alice"])
        .assert()
        .success();

    let csv = read_output(&dir, "general.csv");
    assert_eq!(csv.lines().count(), 3);
    assert!(!csv.contains("Bob"));

    // No record in random.json matches; header-only output
    let csv = read_output(&dir, "random.csv");
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_keyword_filter() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--keyword", "SHIPPING"])
        .assert()
        .success();

    let md = read_output(&dir, "general.md");
    assert!(md.contains("shipping the release"));
    assert!(!md.contains("hello world"));
}

#[test]
fn test_date_range_filter() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--start-date", "2023-11-14", "--end-date", "2023-11-15"])
        .assert()
        .success();

    let csv = read_output(&dir, "general.csv");
    // All three general.json records land on 2023-11-14 UTC
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_invalid_date_aborts_run() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--start-date", "14-11-2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    assert!(!dir.path().join("output_logs").exists());
}

// ============================================================================
// Theme override
// ============================================================================

#[test]
fn test_css_file_override() {
    let dir = setup_fixtures();
    let css_path = dir.path().join("light.css");
    fs::write(&css_path, "body { background: white; }").unwrap();

    logweave()
        .arg(dir.path())
        .args(["--css-file", css_path.to_str().unwrap()])
        .assert()
        .success();

    let html = read_output(&dir, "general.html");
    assert!(html.contains("background: white"));
    assert!(!html.contains("#121212"));
}

#[test]
fn test_missing_css_file_falls_back_to_default() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--css-file", "/no/such/theme.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default theme"));

    let html = read_output(&dir, "general.html");
    assert!(html.contains("#121212"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_bad_file_is_isolated_and_logged() {
    let dir = setup_fixtures();
    fs::write(dir.path().join("corrupt.json"), "!! definitely not json !!").unwrap();

    logweave().arg(dir.path()).assert().success();

    let out = dir.path().join("output_logs");
    assert!(out.join("general.html").is_file());
    assert!(out.join("random.html").is_file());
    assert!(!out.join("corrupt.html").exists());

    let log = fs::read_to_string(out.join("error_log.txt")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("corrupt.json"));
}

#[test]
fn test_missing_input_directory_fails() {
    logweave()
        .arg("/no/such/input/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_empty_input_directory_succeeds() {
    let dir = tempdir().unwrap();

    logweave()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing 0 JSON files"));
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_threads_flag() {
    let dir = setup_fixtures();

    logweave()
        .arg(dir.path())
        .args(["--threads", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Threads:  1"));

    assert!(dir.path().join("output_logs/general.csv").is_file());
}

#[test]
fn test_help_mentions_filters() {
    logweave()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--start-date"))
        .stdout(predicate::str::contains("--css-file"));
}

#[test]
fn test_summary_counts_conversions() {
    let dir = setup_fixtures();
    fs::write(dir.path().join("corrupt.json"), "{{{").unwrap();

    logweave()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted:  2 files"))
        .stdout(predicate::str::contains("Failed:     1 files"));
}
