use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for travel
pub fn travel() -> Command {
    let mut cmd = cargo_bin_cmd!("travel");
    cmd.env_remove("TRAVEL_VAULT")
        .env_remove("RUST_LOG")
        .env_remove("TRAVEL_LOG");
    cmd
}

/// Get a Command for travel running inside `vault`
pub fn travel_in(vault: &Path) -> Command {
    let mut cmd = travel();
    cmd.current_dir(vault);
    cmd
}

/// Write a note, creating parent folders
pub fn write_note(root: &Path, id: &str, content: &str) {
    let path = root.join(id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Vault built from `(id, content)` pairs
pub fn vault(notes: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (id, content) in notes {
        write_note(dir.path(), id, content);
    }
    dir
}

/// `A -> B, C`, `B -> D`, `D -> A`, plus an unreachable note
pub fn sample_vault() -> TempDir {
    vault(&[
        ("A.md", "# A\n\nSee [[B]] and [c](C.md).\n"),
        ("B.md", "# B\n\nOn to [[D]].\n"),
        ("C.md", "# C\n"),
        ("D.md", "Back to [[A]].\n"),
        ("Island.md", "Links to [[A]] but nothing links here.\n"),
    ])
}

/// Stdout lines of a finished command
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
