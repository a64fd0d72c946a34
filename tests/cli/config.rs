use std::fs;

use crate::cli::support::{sample_vault, stdout_lines, travel_in};
use predicates::prelude::*;

// ============================================================================
// travel config
// ============================================================================

#[test]
fn test_config_show_defaults_without_writing() {
    let dir = sample_vault();

    let output = travel_in(dir.path()).args(["config", "show"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["folders-including = *", "editor = (not set)"]
    );
    assert!(!dir.path().join(".travel").exists());
}

#[test]
fn test_config_set_persists_toml() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["config", "set", "folders-including", "projects;areas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folders-including = projects;areas"));

    let content = fs::read_to_string(dir.path().join(".travel").join("config.toml")).unwrap();
    let value: toml::Value = toml::from_str(&content).unwrap();
    assert_eq!(value["folders_including"].as_str(), Some("projects;areas"));
    assert_eq!(value["version"].as_integer(), Some(1));
}

#[test]
fn test_config_unset_restores_default() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["config", "set", "folders-including", "projects"])
        .assert()
        .success();
    travel_in(dir.path())
        .args(["config", "unset", "folders-including", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    travel_in(dir.path())
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"folders_including\": \"*\""));
}

#[test]
fn test_config_scope_changes_order() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["config", "set", "folders-including", "elsewhere"])
        .assert()
        .success();

    travel_in(dir.path())
        .args(["order", "A", "-q"])
        .assert()
        .success()
        .stdout("A.md\n");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid setting colour"));
}

#[test]
fn test_config_rejects_folder_outside_vault() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["config", "set", "folders-including", "../other"])
        .assert()
        .code(2);
    assert!(!dir.path().join(".travel").exists());
}

#[test]
fn test_config_invalid_file_is_reported() {
    let dir = sample_vault();
    fs::create_dir_all(dir.path().join(".travel")).unwrap();
    fs::write(dir.path().join(".travel").join("config.toml"), "version = [").unwrap();

    travel_in(dir.path())
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
