use crate::cli::support::{sample_vault, stdout_lines, travel_in, write_note};
use predicates::prelude::*;

// ============================================================================
// travel session
// ============================================================================

#[test]
fn test_session_walks_every_reachable_note() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["session", "A"])
        .write_stdin("reset\nnext\nnext\nnext\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Start travel with A.md");
    assert_eq!(lines[1], "A.md  0/3");
    assert!(lines[2].ends_with("B.md"));
    assert_eq!(lines[3], "A.md  1/3");
    assert!(lines[4].ends_with("C.md"));
    assert_eq!(lines[5], "A.md  2/3");
    assert!(lines[6].ends_with("D.md"));
    assert_eq!(lines[7], "A.md  3/3");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_session_done_is_lazy_and_repeats() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["session", "C"])
        .write_stdin("reset\nnext\n\n")
        .output()
        .unwrap();

    let lines = stdout_lines(&output);
    assert_eq!(
        lines,
        vec![
            "Start travel with C.md",
            "C.md  0/0",
            "Travel is Done!",
            "C.md  0/0",
            "Travel is Done!",
            "C.md  0/0",
        ]
    );
}

#[test]
fn test_session_without_active_note() {
    let dir = sample_vault();

    travel_in(dir.path())
        .arg("session")
        .write_stdin("progress\nreset\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("reset travel to begin  0/0"))
        .stdout(predicate::str::contains("no active note to start travel from"))
        .stdout(predicate::str::contains("Travel is Done!"));
}

#[test]
fn test_session_active_note_follows_opened_note() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["session", "A"])
        .write_stdin("reset\nnext\nreset\n")
        .output()
        .unwrap();

    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Start travel with B.md".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("B.md  0/3"));
}

#[test]
fn test_session_open_and_reset_with_note() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .arg("session")
        .write_stdin("open D\nreset\nreset C\nquit\nnext\n")
        .output()
        .unwrap();

    let lines = stdout_lines(&output);
    assert!(lines[0].ends_with("D.md"));
    assert_eq!(lines[1], "Start travel with D.md");
    assert_eq!(lines[2], "D.md  0/3");
    assert_eq!(lines[3], "Start travel with C.md");
    assert_eq!(lines[4], "C.md  0/0");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_session_reset_sees_new_links() {
    let dir = sample_vault();
    write_note(dir.path(), "C.md", "Now links to [[Island]]");

    travel_in(dir.path())
        .args(["session", "A"])
        .write_stdin("reset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A.md  0/4"));
}

#[test]
fn test_session_bad_lines_do_not_end_session() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["session", "A"])
        .write_stdin("jump\nreset Nowhere\nopen\nprogress\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command: jump"))
        .stderr(predicate::str::contains("note not found: Nowhere"))
        .stdout(predicate::str::contains("reset travel to begin  0/0"));
}

#[test]
fn test_session_unknown_start_note_exit_code_3() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["session", "Nowhere"])
        .write_stdin("")
        .assert()
        .code(3);
}

#[test]
fn test_session_json_events() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["--format", "json", "session", "B"])
        .write_stdin("reset\nnext\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = stdout_lines(&output)
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events[0]["event"], "notice");
    assert_eq!(events[0]["message"], "Start travel with B.md");
    assert_eq!(events[1]["event"], "progress");
    assert_eq!(events[1]["total"], 3);
    assert_eq!(events[2]["event"], "open");
    assert_eq!(events[2]["note"], "D.md");
    assert_eq!(events[3]["traveled"], 1);
    assert_eq!(events[3]["remaining"], 2);
}

#[test]
fn test_session_open_without_editor_is_usage_error() {
    let dir = sample_vault();

    travel_in(dir.path())
        .env_remove("VISUAL")
        .env_remove("EDITOR")
        .args(["session", "A", "--open"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no editor configured"));
}

#[test]
fn test_session_open_runs_configured_editor() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["session", "A", "--open", "--editor", "true"])
        .write_stdin("reset\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A.md  1/3"));
}
