//! Integration tests for `heapfind components` and `heapfind connected`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `heapfind` binary.
fn heapfind_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("heapfind");
    path
}

fn write_input(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

const EDGES: &str = "# two clusters\n0 1\n1 2\n\n3 4\n";

#[test]
fn components_human_output() {
    let input = write_input(EDGES);
    let out = Command::new(heapfind_bin())
        .args(["components", input.path().to_str().expect("path"), "--size", "6"])
        .output()
        .expect("run heapfind components");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "components: 3\n  0 1 2\n  3 4\n  5\n"
    );
}

#[test]
fn components_json_output() {
    let input = write_input(EDGES);
    let out = Command::new(heapfind_bin())
        .args([
            "components",
            input.path().to_str().expect("path"),
            "--size",
            "6",
            "-f",
            "json",
        ])
        .output()
        .expect("run heapfind components --format json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("valid JSON from components");
    assert_eq!(value["size"], 6);
    assert_eq!(value["components"], 3);
    assert_eq!(value["groups"], serde_json::json!([[0, 1, 2], [3, 4], [5]]));
}

#[test]
fn components_zero_size_exits_1() {
    let input = write_input("");
    let out = Command::new(heapfind_bin())
        .args(["components", input.path().to_str().expect("path"), "--size", "0"])
        .output()
        .expect("run heapfind components");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn components_out_of_range_exits_1() {
    let input = write_input("0 1\n2 9\n");
    let out = Command::new(heapfind_bin())
        .args(["components", input.path().to_str().expect("path"), "--size", "3"])
        .output()
        .expect("run heapfind components");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("element 9"), "stderr: {stderr}");
}

#[test]
fn components_malformed_pair_exits_2() {
    let input = write_input("0 1 2\n");
    let out = Command::new(heapfind_bin())
        .args(["components", input.path().to_str().expect("path"), "--size", "3"])
        .output()
        .expect("run heapfind components");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn connected_same_component_is_true() {
    let input = write_input(EDGES);
    let out = Command::new(heapfind_bin())
        .args([
            "connected",
            input.path().to_str().expect("path"),
            "--size",
            "6",
            "2",
            "0",
        ])
        .output()
        .expect("run heapfind connected");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn connected_json_reports_component_size() {
    let input = write_input(EDGES);
    let out = Command::new(heapfind_bin())
        .args([
            "connected",
            input.path().to_str().expect("path"),
            "--size",
            "6",
            "3",
            "5",
            "--format",
            "json",
        ])
        .output()
        .expect("run heapfind connected --format json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("valid JSON from connected");
    assert_eq!(value["connected"], false);
    assert_eq!(value["component_size"], 2);
}

#[test]
fn connected_query_out_of_range_exits_1() {
    let input = write_input(EDGES);
    let out = Command::new(heapfind_bin())
        .args([
            "connected",
            input.path().to_str().expect("path"),
            "--size",
            "6",
            "0",
            "6",
        ])
        .output()
        .expect("run heapfind connected");
    assert_eq!(out.status.code(), Some(1));
}
