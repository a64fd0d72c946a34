use crate::cli::support::{travel, travel_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    travel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: travel"))
        .stdout(predicate::str::contains("order"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    travel()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("travel"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    travel_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("travel --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    travel()
        .args(["--format", "xml", "order", "A"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_code_2() {
    travel().arg("wander").assert().code(2);
}

#[test]
fn test_parse_error_json_envelope() {
    travel()
        .args(["--format", "json", "order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_vault_exit_code_3() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    travel()
        .arg("--vault")
        .arg(&missing)
        .args(["order", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}
