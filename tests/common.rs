use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn frontier() -> Command {
    cargo_bin_cmd!("frontier")
}

/// Write an edge list into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, edges: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, edges).unwrap();
    path
}

/// Parse a command's stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
