//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current settings format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Value of `folders_including` that keeps every note in scope
pub const ALL_FOLDERS: &str = "*";

/// Persisted travel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Settings format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Folders to travel through, separated by `;` (`*` for the whole vault)
    #[serde(default = "default_folders_including")]
    pub folders_including: String,

    /// Editor override used when opening notes (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            folders_including: default_folders_including(),
            editor: None,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_folders_including() -> String {
    ALL_FOLDERS.to_string()
}
