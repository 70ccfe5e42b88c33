#!/usr/bin/env rust
//! Integration tests for the textdup CLI
//!
//! Exercise the binary end to end: score files, error exits, and the
//! configuration helper subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ORIGINAL: &str = "今天是星期天，天气晴，今天晚上我要去看电影。";
const COPY: &str = "今天是周天，天气晴朗，我晚上要去看电影。";

/// Test helper to get the CLI binary
fn textdup_cmd() -> Command {
    Command::cargo_bin("textdup").unwrap()
}

#[test]
fn test_cli_help() {
    textdup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("print-default-config"));
}

#[test]
fn test_compare_identical_documents() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let copy = dir.path().join("copy.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();
    fs::write(&copy, ORIGINAL).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .arg("compare")
        .arg(&orig)
        .arg(&copy)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplication rate:"))
        .stdout(predicate::str::contains("100.00"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "100.00\n");
}

#[test]
fn test_compare_modified_document_writes_two_decimals() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let copy = dir.path().join("copy.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();
    fs::write(&copy, COPY).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .args(["compare", "--details"])
        .arg(&orig)
        .arg(&copy)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("simhash"));

    let written = fs::read_to_string(&out).unwrap();
    let value = written.trim_end();
    assert!(written.ends_with('\n'));
    assert_eq!(value.split('.').nth(1).map(str::len), Some(2));
    let score: f64 = value.parse().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[test]
fn test_compare_json_output() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let copy = dir.path().join("copy.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();
    fs::write(&copy, COPY).unwrap();

    let output = textdup_cmd()
        .current_dir(dir.path())
        .args(["compare", "--format", "json", "--parallel", "--hashbits", "128"])
        .arg(&orig)
        .arg(&copy)
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let final_score = report["final_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&final_score));
    for metric in ["lcs", "edit", "jaccard", "simhash"] {
        let value = report["similarities"][metric].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&value), "{metric} out of range");
    }
}

#[test]
fn test_compare_empty_candidate_fails_without_output() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let copy = dir.path().join("copy.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();
    fs::write(&copy, "，。！").unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .arg("compare")
        .arg(&orig)
        .arg(&copy)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("candidate"));

    assert!(!out.exists());
}

#[test]
fn test_compare_missing_document_fails() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .arg("compare")
        .arg(&orig)
        .arg(dir.path().join("missing.txt"))
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!out.exists());
}

#[test]
fn test_compare_rejects_zero_ngram_size() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .args(["compare", "--ngram-size", "0"])
        .arg(&orig)
        .arg(&orig)
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn test_compare_rejects_oversized_hashbits() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .args(["compare", "--hashbits", "18446744073709551615"])
        .arg(&orig)
        .arg(&orig)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hashbits"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!out.exists());
}

#[test]
fn test_rust_log_enables_debug_output() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();

    textdup_cmd()
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .arg("compare")
        .arg(&orig)
        .arg(&orig)
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Computed duplication score"));
}

#[test]
fn test_compare_uses_implicit_config_file() {
    let dir = tempdir().unwrap();
    let orig = dir.path().join("orig.txt");
    let out = dir.path().join("result.txt");
    fs::write(&orig, ORIGINAL).unwrap();
    fs::write(dir.path().join(".textdup.yml"), "similarity:\n  hashbits: 0\n").unwrap();

    // hashbits 0 from the implicit file must be picked up and rejected
    textdup_cmd()
        .current_dir(dir.path())
        .arg("compare")
        .arg(&orig)
        .arg(&orig)
        .arg(&out)
        .assert()
        .failure();
}

#[test]
fn test_print_default_config() {
    textdup_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("hashbits: 64"))
        .stdout(predicate::str::contains("ngram_size: 2"))
        .stdout(predicate::str::contains("simhash: 0.6"));
}

#[test]
fn test_init_config_refuses_overwrite() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("textdup.yml");

    textdup_cmd()
        .arg("init-config")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved to:"));
    assert!(config_path.exists());

    textdup_cmd()
        .arg("init-config")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    textdup_cmd()
        .arg("init-config")
        .arg("--output")
        .arg(&config_path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_validate_config_valid_and_invalid() {
    let dir = tempdir().unwrap();
    let valid = dir.path().join("valid.yml");
    let invalid = dir.path().join("invalid.yml");
    fs::write(&valid, "similarity:\n  ngram_size: 3\n").unwrap();
    fs::write(
        &invalid,
        "similarity:\n  weights:\n    lcs: -0.5\n    edit: 0.5\n    jaccard: 0.5\n    simhash: 0.5\n",
    )
    .unwrap();

    textdup_cmd()
        .args(["validate-config", "--config"])
        .arg(&valid)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid!"));

    textdup_cmd()
        .args(["validate-config", "--config"])
        .arg(&invalid)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}
