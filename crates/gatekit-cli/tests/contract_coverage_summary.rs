#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! Exit-code and output contract for `coverage-summary`.
//! `fixtures/coverage-summary.json` is the byte-exact expected output for `fixtures/llvm-cov.json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn coverage_summary() -> Command {
    let mut cmd = Command::cargo_bin("coverage-summary").expect("coverage-summary binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_export_to_golden_summary() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("coverage-summary.json");

    coverage_summary()
        .arg(fixture("llvm-cov.json"))
        .arg(&dst)
        .assert()
        .success()
        .stdout(format!(
            "Wrote {} (lines: 26/33 = 78.79%)\n",
            dst.display()
        ));

    let got = fs::read_to_string(&dst).unwrap();
    let expected = fs::read_to_string(fixture("coverage-summary.json")).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn drops_non_rust_files_and_normalizes_backend_paths() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("out.json");
    coverage_summary()
        .arg(fixture("llvm-cov.json"))
        .arg(&dst)
        .assert()
        .success();

    let summary: Value = serde_json::from_str(&fs::read_to_string(&dst).unwrap()).unwrap();
    let keys: Vec<&str> = summary["files"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec!["backend/src/lib.rs", "backend/src/routes.rs", "tools/gen.rs"]
    );
}

#[test]
fn creates_missing_output_directories() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("coverage").join("ci").join("coverage-summary.json");
    coverage_summary()
        .arg(fixture("llvm-cov.json"))
        .arg(&dst)
        .assert()
        .success();
    assert!(dst.is_file());
}

#[test]
fn rerun_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("coverage-summary.json");
    coverage_summary()
        .arg(fixture("llvm-cov.json"))
        .arg(&dst)
        .assert()
        .success();
    let first = fs::read(&dst).unwrap();
    coverage_summary()
        .arg(fixture("llvm-cov.json"))
        .arg(&dst)
        .assert()
        .success();
    assert_eq!(first, fs::read(&dst).unwrap());
}

#[test]
fn empty_data_yields_full_totals_and_no_files() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("llvm-cov.json");
    let dst = tmp.path().join("out.json");
    fs::write(&src, r#"{"data": []}"#).unwrap();

    coverage_summary()
        .arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("(lines: 0/0 = 100.00%)\n"));

    let summary: Value = serde_json::from_str(&fs::read_to_string(&dst).unwrap()).unwrap();
    assert_eq!(summary["files"], serde_json::json!({}));
    for kind in ["lines", "functions", "branches", "statements"] {
        let block = &summary["total"][kind];
        assert_eq!(block["total"], 0, "{kind}");
        assert_eq!(block["covered"], 0, "{kind}");
        assert_eq!(block["skipped"], 0, "{kind}");
        assert_eq!(block["pct"], 100.0, "{kind}");
    }
}

#[test]
fn missing_input_exits_2() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("out.json");
    coverage_summary()
        .arg(tmp.path().join("missing.json"))
        .arg(&dst)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("Input file not found: "));
    assert!(!dst.exists());
}

#[test]
fn wrong_arity_exits_2_with_usage() {
    coverage_summary()
        .arg("only-one.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
    coverage_summary().assert().code(2);
}

#[test]
fn malformed_input_is_fatal() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("llvm-cov.json");
    fs::write(&src, "{\"data\": [").unwrap();
    coverage_summary()
        .arg(&src)
        .arg(tmp.path().join("out.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse coverage JSON"));
}
