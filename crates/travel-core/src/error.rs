//! Error types and exit codes for travel
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid settings)
//! - 3: Data error (missing vault, unknown note, no active note)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the travel CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vault, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while travelling a vault
#[derive(Error, Debug)]
pub enum TravelError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid setting {key}: {value}")]
    InvalidSetting { key: String, value: String },

    // Data errors (exit code 3)
    #[error("no active note to start travel from")]
    NoActiveNote,

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("failed to open {id}: {reason}")]
    UnresolvedTarget { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TravelError {
    /// Create an error for a note that does not resolve inside the vault
    pub fn note_not_found(id: impl std::fmt::Display) -> Self {
        TravelError::NoteNotFound { id: id.to_string() }
    }

    /// Create an error for a note the opener could not show
    pub fn unresolved_target(id: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        TravelError::UnresolvedTarget {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a rejected configuration value
    pub fn invalid_setting(key: &str, value: impl std::fmt::Display) -> Self {
        TravelError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TravelError::UsageError(_)
            | TravelError::InvalidSetting { .. } => ExitCode::Usage,

            TravelError::NoActiveNote
            | TravelError::NoteNotFound { .. }
            | TravelError::VaultNotFound { .. } => ExitCode::Data,

            TravelError::UnresolvedTarget { .. }
            | TravelError::Io(_)
            | TravelError::Json(_)
            | TravelError::Toml(_)
            | TravelError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TravelError::UsageError(_) => "usage_error",
            TravelError::InvalidSetting { .. } => "invalid_setting",
            TravelError::NoActiveNote => "no_active_note",
            TravelError::NoteNotFound { .. } => "note_not_found",
            TravelError::VaultNotFound { .. } => "vault_not_found",
            TravelError::UnresolvedTarget { .. } => "unresolved_target",
            TravelError::Io(_) => "io_error",
            TravelError::Json(_) => "json_error",
            TravelError::Toml(_) => "toml_error",
            TravelError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for travel operations
pub type Result<T> = std::result::Result<T, TravelError>;
