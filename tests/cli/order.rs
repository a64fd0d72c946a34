use crate::cli::support::{sample_vault, stdout_lines, travel, travel_in, vault, write_note};
use predicates::prelude::*;

// ============================================================================
// travel order
// ============================================================================

#[test]
fn test_order_breadth_first() {
    let dir = sample_vault();

    let output = travel_in(dir.path()).args(["order", "A"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["A.md", "B.md", "C.md", "D.md", "", "3 notes to travel"]
    );
}

#[test]
fn test_order_quiet_prints_only_notes() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["order", "A.md", "--quiet"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output), vec!["A.md", "B.md", "C.md", "D.md"]);
}

#[test]
fn test_order_with_vault_flag_and_file_path() {
    let dir = sample_vault();
    let note = dir.path().join("B.md");

    travel()
        .arg("--vault")
        .arg(dir.path())
        .arg("order")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("B.md\nD.md\nA.md\nC.md\n"));
}

#[test]
fn test_order_json() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["--format", "json", "order", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "A.md");
    assert_eq!(
        json["order"],
        serde_json::json!(["A.md", "B.md", "C.md", "D.md"])
    );
    assert_eq!(json["total"], 3);
}

#[test]
fn test_order_note_without_links() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["order", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 notes to travel"));
}

#[test]
fn test_order_unknown_note_exit_code_3() {
    let dir = sample_vault();

    travel_in(dir.path())
        .args(["order", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: Nowhere"));
}

#[test]
fn test_order_rejects_files_that_are_not_notes() {
    let dir = sample_vault();
    write_note(dir.path(), "image.png", "");
    write_note(dir.path(), ".travel/config.toml", "");

    travel_in(dir.path())
        .args(["order", "image.png"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: image.png"));

    travel_in(dir.path())
        .arg("order")
        .arg(dir.path().join(".travel").join("config.toml"))
        .assert()
        .code(3);
}

#[test]
fn test_order_unknown_note_json_envelope() {
    let dir = sample_vault();

    let output = travel_in(dir.path())
        .args(["--format", "json", "order", "Nowhere"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "note_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_order_follows_nested_links_and_skips_unresolved() {
    let dir = vault(&[
        ("Index.md", "[[projects/Plan]] [[Ghost]] [site](https://example.com)"),
        ("projects/Plan.md", "[next](./Next.md) and `[[Index]]`"),
        ("projects/Next.md", "```\n[[Hidden]]\n```\n"),
        ("Hidden.md", ""),
    ]);

    let output = travel_in(dir.path())
        .args(["order", "Index", "-q"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_lines(&output),
        vec!["Index.md", "projects/Plan.md", "projects/Next.md"]
    );
}

#[test]
fn test_order_respects_folder_scope() {
    let dir = vault(&[
        ("Index.md", "[[archive/Old]] [[projects/Plan]]"),
        ("archive/Old.md", ""),
        ("projects/Plan.md", ""),
    ]);
    write_note(
        dir.path(),
        ".travel/config.toml",
        "folders_including = \"projects\"\n",
    );

    let output = travel_in(dir.path())
        .args(["order", "Index", "-q"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output), vec!["Index.md", "projects/Plan.md"]);
}
