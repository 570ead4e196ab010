//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate").arg("--mode").arg("staging");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode 'staging'"));
}

#[test]
fn test_bad_port_is_reported() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate")
        .arg("--mode")
        .arg("test")
        .env_remove("DATABASE_URL")
        .env("TEST_PORT", "not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("TEST_PORT"));
}
