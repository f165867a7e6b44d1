//! End-to-end tests of the `additive-epsilon` binary.

#![cfg(feature = "cli")]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn reference_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(reference: &Path, extra: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_additive-epsilon"))
        .arg("--reference")
        .arg(reference)
        .args(["--objectives", "2"])
        .args(extra)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // the binary may exit before reading stdin, so a broken pipe is fine
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn stdout_value(output: &Output) -> f64 {
    String::from_utf8_lossy(&output.stdout).trim().parse().unwrap()
}

// ---- Success ----

#[test]
fn test_prints_shift() {
    let reference = reference_file("1 1\n");
    let output = run(reference.path(), &[], "2 2\n");
    assert!(output.status.success());
    assert_eq!(stdout_value(&output), 1.0);
}

#[test]
fn test_maximize_flag() {
    let reference = reference_file("2 1.5\n");
    let output = run(reference.path(), &["--maximize"], "1 1\n");
    assert!(output.status.success());
    assert_eq!(stdout_value(&output), 1.0);
}

#[test]
fn test_separator_and_header() {
    let reference = reference_file("f1,f2\n1,5\n5,1\n");
    let output = run(
        reference.path(),
        &["--separator", ",", "--header-lines", "1"],
        "f1,f2\n1,1\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_value(&output), 0.0);
}

// ---- Failures ----

#[test]
fn test_missing_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("absent.txt"), &[], "2 2\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reference front"), "stderr: {stderr}");
}

#[test]
fn test_empty_stdin() {
    let reference = reference_file("1 1\n");
    let output = run(reference.path(), &[], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_zero_objectives_rejected() {
    let reference = reference_file("1 1\n");
    let output = Command::new(env!("CARGO_BIN_EXE_additive-epsilon"))
        .arg("--reference")
        .arg(reference.path())
        .args(["--objectives", "0"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
}
