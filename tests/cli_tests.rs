//! Integration tests for the frontier CLI
//!
//! These tests run the frontier binary from an empty temporary directory so
//! no stray `frontier.toml` is picked up.

mod common;

use common::{frontier, stdout_json, write_graph};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    frontier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: frontier"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_version_flag() {
    frontier()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontier"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("frontier --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    frontier().args(["--format", "yaml", "info"]).assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    frontier()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .args(["info", "--graph", "missing.dat"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_malformed_edge_list_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "bad.dat", "1 2\n3 x\n");
    frontier()
        .current_dir(dir.path())
        .arg("info")
        .arg("--graph")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_unknown_node_exit_code_3() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .args(["bfs", "--start", "1", "--goal", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 99"));
}

#[test]
fn test_unknown_node_json_envelope() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .args(["--format", "json", "ucs", "--start", "0", "--goal", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"node_not_found\""));
}

#[test]
fn test_render_algorithm_uses_config_pair() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("frontier.toml"),
        "[ucs]\nstart = 1\ngoal = 2\n",
    )
    .unwrap();
    frontier()
        .current_dir(dir.path())
        .args(["render", "--algorithm", "ucs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 -- 3 [label=\"1\", color=\"#aa0000\""));
}

#[test]
fn test_random_graph_needs_two_nodes() {
    frontier()
        .args(["info", "--random", "1"])
        .assert()
        .code(2);
}

// ============================================================================
// info / generate
// ============================================================================

#[test]
fn test_info_defaults_to_cube() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cube"))
        .stdout(predicate::str::contains("Nodes      8"))
        .stdout(predicate::str::contains("Edges      12"))
        .stdout(predicate::str::contains("Connected  yes"));
}

#[test]
fn test_generate_then_info_round_trip() {
    let dir = tempdir().unwrap();

    let output = frontier()
        .current_dir(dir.path())
        .args(["generate", "--nodes", "25", "--extra-edges", "40", "--seed", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("# random connected graph: 25 nodes"));

    let path = write_graph(dir.path(), "random.dat", &text);
    let output = frontier()
        .current_dir(dir.path())
        .args(["--format", "json", "info", "--graph"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 25);
    assert_eq!(json["connected"], true);
}

#[test]
fn test_generate_is_reproducible() {
    let run = || {
        frontier()
            .args(["generate", "--nodes", "40", "--seed", "77", "--max-weight", "9"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_json() {
    let output = frontier()
        .args(["--format", "json", "generate", "--nodes", "5", "--extra-edges", "0", "--seed", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["seed"], 1);
    assert_eq!(json["edges"].as_array().unwrap().len(), 4);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_supplies_default_pair() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frontier.toml"), "[ucs]\nstart = 3\ngoal = 5\n").unwrap();

    let output = frontier()
        .current_dir(dir.path())
        .args(["--format", "json", "ucs"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["start"], 3);
    assert_eq!(json["goal"], 5);
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frontier.toml"), "[ucs]\nstart = 3\ngoal = 5\n").unwrap();

    let output = frontier()
        .current_dir(dir.path())
        .args(["--format", "json", "bfs", "--goal", "8"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["start"], 3);
    assert_eq!(json["goal"], 8);
}

#[test]
fn test_unknown_config_key_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frontier.toml"), "[bfs]\nnode = 10\n").unwrap();

    frontier()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("experiment.toml");
    fs::write(&config, "[bfs]\nnodes = 60\ntrials = 7\nseed = 5\n").unwrap();

    let output = frontier()
        .args(["--format", "json", "validate", "bfs", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 60);
    assert_eq!(json["trials"], 7);
    assert_eq!(json["seed"], 5);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_env_override_writes_to_stderr() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .env("FRONTIER_LOG", "frontier_core=info")
        .args(["validate", "ucs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("matches the oracle on every pair"));
}

#[test]
fn test_logs_are_quiet_by_default() {
    let dir = tempdir().unwrap();
    frontier()
        .current_dir(dir.path())
        .env_remove("FRONTIER_LOG")
        .env_remove("RUST_LOG")
        .args(["validate", "ucs"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
