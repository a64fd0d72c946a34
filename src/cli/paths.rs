//! Path resolution for CLI commands

use std::env;
use std::path::PathBuf;

/// Resolve the vault directory.
///
/// Uses `--vault` when given, otherwise the current working directory, or
/// "." if that cannot be determined.
pub fn resolve_vault_path(vault: Option<PathBuf>) -> PathBuf {
    vault.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
