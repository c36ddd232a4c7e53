//! End-to-end runs of the `gotype` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../gotype-parser/tests/fixtures")
        .join(name)
}

fn gotype(args: &[&str]) -> Output {
    let cwd = tempfile::tempdir().expect("tempdir");
    Command::new(env!("CARGO_BIN_EXE_gotype"))
        .args(args)
        .current_dir(cwd.path())
        .env_remove("GOTYPE_LOG")
        .env_remove("GOTYPE_OUTPUT__FORMAT")
        .env_remove("GOTYPE_PARSER__VERBOSE")
        .output()
        .expect("binary runs")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn types_prints_every_declaration() {
    let file = fixture("types.go");
    let output = gotype(&["types", file.to_str().expect("utf-8 path")]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = stdout_json(&output);
    assert_eq!(json["types"][0]["name"], "TypeA");
    assert_eq!(json["types"][1]["name"], "InterfaceA");
    assert_eq!(json["types"][0]["docs"][1], "//metadata");
}

#[test]
fn raw_format_is_one_line() {
    let file = fixture("types.go");
    let output = gotype(&[
        "--format",
        "raw",
        "methods",
        file.to_str().expect("utf-8 path"),
        "InterfaceA",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let json = stdout_json(&output);
    assert_eq!(json["methods"][1]["params"][0]["type"], "...int");
}

#[test]
fn tag_values_per_field() {
    let file = fixture("types.go");
    let output = gotype(&[
        "fields",
        file.to_str().expect("utf-8 path"),
        "TypeA",
        "--tag",
        "json",
    ]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["fields"][0]["values"][0], "-");
    assert_eq!(json["fields"][1]["values"], serde_json::json!([]));
}

#[test]
fn unknown_type_exits_with_error() {
    let file = fixture("types.go");
    let output = gotype(&["fields", file.to_str().expect("utf-8 path"), "Nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nope"));
}

#[test]
fn wrong_mode_exits_with_error() {
    let file = fixture("types.go");
    let output = gotype(&["methods", file.to_str().expect("utf-8 path"), "TypeA"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn syntax_error_reports_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.go");
    std::fs::write(&path, "package broken\n\ntype A struct {\n").expect("write");

    let output = gotype(&["types", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Syntax error at line"), "stderr: {stderr}");
}

#[test]
fn non_go_file_exits_with_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("go.mod");
    std::fs::write(&path, "module example.com/x\n").expect("write");

    let output = gotype(&["types", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a Go source file"), "stderr: {stderr}");
}
