//! Persisted travel settings
//!
//! Settings live in `<vault>/.travel/config.toml`. A missing file means
//! defaults; the file is only written when a setting is edited.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_setting;
use crate::error::{Result, TravelError};
use crate::vault::Scope;

pub use types::{TravelConfig, ALL_FOLDERS, CONFIG_FORMAT_VERSION};

/// Settings directory inside a vault
pub const CONFIG_DIR: &str = ".travel";

/// Settings file inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Setting keys accepted by [`TravelConfig::set`] and [`TravelConfig::unset`]
pub const SETTING_KEYS: &[&str] = &["folders-including", "editor"];

/// Location of the settings file for a vault
pub fn config_path(vault_root: &Path) -> PathBuf {
    vault_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

impl TravelConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TravelConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "settings written by a newer version"
            );
        }

        Ok(config)
    }

    /// Load the vault's settings, falling back to defaults when absent
    pub fn load_for_vault(vault_root: &Path) -> Result<Self> {
        let path = config_path(vault_root);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TravelError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save the settings into the vault's settings file
    pub fn save_for_vault(&self, vault_root: &Path) -> Result<()> {
        self.save(&config_path(vault_root))
    }

    /// Update a setting by its CLI key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "folders-including" => {
                validate_folders(value)?;
                self.folders_including = value.trim().to_string();
            }
            "editor" => {
                if value.trim().is_empty() {
                    bail_setting!(key, "editor command cannot be empty");
                }
                self.editor = Some(value.trim().to_string());
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Restore a setting to its default
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "folders-including" => self.folders_including = ALL_FOLDERS.to_string(),
            "editor" => self.editor = None,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Scope predicate derived from `folders_including`
    pub fn scope(&self) -> Scope {
        Scope::parse(&self.folders_including)
    }
}

fn unknown_key(key: &str) -> TravelError {
    TravelError::invalid_setting(
        key,
        format!("unknown key (expected one of: {})", SETTING_KEYS.join(", ")),
    )
}

fn validate_folders(value: &str) -> Result<()> {
    for folder in value.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        if folder.starts_with('/') || folder.split('/').any(|segment| segment == "..") {
            bail_setting!(
                "folders-including",
                format!("{} is not inside the vault", folder)
            );
        }
    }
    Ok(())
}
