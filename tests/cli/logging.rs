use crate::cli::support::{sample_vault, travel_in};
use predicates::prelude::*;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["--log-level", "debug", "order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["--log-level", "warn", "order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["--verbose", "order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("snapshot"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["--verbose", "--format", "json", "order", "A"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_format() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["--log-level", "debug", "--log-json", "order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_travel_log_env_overrides_level() {
    let dir = sample_vault();

    travel_in(dir.path())
        .env("TRAVEL_LOG", "travel=debug")
        .args(["order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
