//! Integration tests for the rapport CLI
//!
//! These tests run the rapport binary against temporary edge lists and
//! config directories.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const FRIENDS: &str = "\
# two groups of friends
Alice, Bob, 5
Bob, Charlie, 3
Alice, David, 10
-
Emily, Frank, 4
";

/// A rapport command isolated from the user's config and environment
fn rapport(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rapport");
    cmd.env("RAPPORT_CONFIG_DIR", dir.join("config"))
        .env_remove("RAPPORT_EDGES")
        .env_remove("RAPPORT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_edges(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("edges.txt");
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    rapport(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rapport"))
        .stdout(predicate::str::contains("connected"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("find"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    rapport(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rapport --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    rapport(dir.path())
        .args(["--format", "records", "stats"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_edges_is_usage_error() {
    let dir = tempdir().unwrap();
    rapport(dir.path())
        .args(["connected", "Alice", "Bob"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--edges"));
}

#[test]
fn test_usage_error_json_envelope() {
    let dir = tempdir().unwrap();
    let output = rapport(dir.path())
        .args(["--format", "json", "path", "Alice"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

// ============================================================================
// Edge list loading
// ============================================================================

#[test]
fn test_edges_from_env() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .env("RAPPORT_EDGES", &edges)
        .args(["connected", "Alice", "Charlie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("are connected"));
}

#[test]
fn test_malformed_edge_list_exit_code_3() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, "Alice, Bob, 5\nAlice, Bob, lots\n");
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_edge_file_exit_code_3() {
    let dir = tempdir().unwrap();
    rapport(dir.path())
        .arg("--edges")
        .arg(dir.path().join("absent.txt"))
        .arg("stats")
        .assert()
        .code(3);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_connected_and_disconnected() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["connected", "Alice", "Charlie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice and Charlie are connected"));
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["connected", "Alice", "Emily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("are not connected"));
}

#[test]
fn test_path_human() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Charlie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice -> Bob -> Charlie"))
        .stdout(predicate::str::contains("distance: 8"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "path", "Alice", "Charlie"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "found");
    assert_eq!(json["distance"], 8);
    assert_eq!(json["from"], "Alice");
    assert_eq!(json["nodes"], serde_json::json!(["Alice", "Bob", "Charlie"]));
}

#[test]
fn test_path_disconnected_exits_zero() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "path", "Alice", "Emily"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "disconnected");
}

#[test]
fn test_path_unknown_person_is_disconnected() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Zoe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not connected"));
}

#[test]
fn test_path_limit_exceeded_exits_zero() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "path", "Alice", "Charlie", "--limit", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "exceeds_limit");
    assert_eq!(json["limit"], 3);
}

#[test]
fn test_find_closest_match() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "find", "Alice", "--pattern", "^(Charlie|David)$"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["match"]["node"], "Charlie");
    assert_eq!(json["match"]["path"]["distance"], 8);
}

#[test]
fn test_find_no_match() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["find", "Alice", "--pattern", "^Frank$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn test_find_invalid_pattern_exit_code_2() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["find", "Alice", "--pattern", "("])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn test_components_and_stats() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice, Bob, Charlie, David"))
        .stdout(predicate::str::contains("2. Emily, Frank"));

    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 6);
    assert_eq!(json["edges"], 4);
    assert_eq!(json["components"], 2);
    assert!(json["default_limit"].is_null());
}

// ============================================================================
// Default limit persistence
// ============================================================================

#[test]
fn test_limit_persists_and_applies() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);

    rapport(dir.path())
        .arg("limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("default limit: unlimited"));

    rapport(dir.path())
        .args(["limit", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default limit set to 8"));
    assert!(dir.path().join("config").join("config.toml").exists());

    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Charlie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from Alice to Charlie below 8"));

    // An explicit --limit 0 lifts the default
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Charlie", "--limit", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice -> Bob -> Charlie"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    rapport(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["limit", "0"])
        .assert()
        .success();
    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("default_limit = 0"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[search\n").unwrap();
    rapport(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("limit")
        .assert()
        .code(1);
}

#[test]
fn test_find_unknown_start_matches_nothing() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["find", "Zoe", "--pattern", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match for 'Z' reachable from Zoe"));

    let output = rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "find", "Zoe", "--pattern", "."])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output)["match"].is_null());
}

#[test]
fn test_path_without_verification() {
    let dir = tempdir().unwrap();
    let edges = write_edges(&dir, FRIENDS);
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Charlie", "--no-verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice -> Bob -> Charlie"))
        .stdout(predicate::str::contains("distance: 8"));
    rapport(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "Alice", "Charlie", "--no-verify", "--limit", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from Alice to Charlie below 8"));
}
