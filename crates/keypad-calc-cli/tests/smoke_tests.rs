//! Smoke tests for the keycalc CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("KEYCALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2.0"));
}

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_left_to_right() {
    keycalc()
        .args(["eval", "2", "+", "3", "×", "4", "="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_ascii_spellings() {
    keycalc()
        .args(["eval", "12", "/", "5", "="])
        .assert()
        .success()
        .stdout("2.4\n");
}

#[test]
fn test_eval_subtraction_argument() {
    keycalc()
        .args(["eval", "5", "-", "2", "-", "1", "="])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "1", "/", "0", "="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_eval_json() {
    keycalc()
        .args(["eval", "--format", "json", "7", "+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\":\"7\""))
        .stdout(predicate::str::contains("\"operator\":\"add\""));
}

#[test]
fn test_eval_invalid_symbol() {
    keycalc()
        .args(["eval", "2", "^", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input symbol"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_reject_policy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("keycalc.yaml");
    fs::write(&config, "non_finite: reject\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&config)
        .args(["eval", "1", "/", "0", "="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-finite result: Infinity"));
}

#[test]
fn test_config_invalid() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("keycalc.yaml");
    fs::write(&config, "non_finite: maybe\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&config)
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ============================================================================
// keypad / repl / play
// ============================================================================

#[test]
fn test_keypad_layout() {
    keycalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("AC"))
        .stdout(predicate::str::contains("⟳"));
}

#[test]
fn test_repl_reads_stdin() {
    keycalc()
        .arg("repl")
        .write_stdin("2 0 0\n%\n")
        .assert()
        .success()
        .stdout("200\n2\n");
}

#[test]
fn test_play_passing_playbook() {
    let dir = TempDir::new().unwrap();
    let playbook = dir.path().join("chain.yaml");
    fs::write(
        &playbook,
        r#"
name: chain
steps:
  - name: running total
    press: "2 + 3 ×"
    expect_display: "5"
    expect_operator: multiply
  - name: result
    press: "4 ="
    expect_display: "20"
    expect_operator: none
"#,
    )
    .unwrap();

    keycalc()
        .args(["play", "--keypad"])
        .arg(&playbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("2/2 steps passed"));
}

#[test]
fn test_play_failing_playbook() {
    let dir = TempDir::new().unwrap();
    let playbook = dir.path().join("wrong.yaml");
    fs::write(
        &playbook,
        "steps:\n  - press: \"2 + 3 × 4 =\"\n    expect_display: \"14\"\n",
    )
    .unwrap();

    keycalc()
        .arg("play")
        .arg(&playbook)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL]"))
        .stderr(predicate::str::contains("Playbook failed"));
}

#[test]
fn test_play_missing_file() {
    keycalc()
        .args(["play", "/nonexistent/playbook.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
