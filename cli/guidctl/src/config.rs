//! Settings management.
//!
//! Handles:
//! - Which rendering categories the pick list offers
//! - Loading and saving the settings file
//! - Per-invocation overrides from flags and environment

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use iguid_catalog::Categories;
use serde::{Deserialize, Serialize};

/// Settings file name.
const SETTINGS_FILE: &str = "settings.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "insert-guid", "guid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Default settings file location.
pub fn default_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// Stored settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Categories offered in the pick list.
    #[serde(flatten)]
    pub categories: Categories,
}

impl Settings {
    /// Load settings from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {:?}", path))
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to write settings to {:?}", path))?;
            file.write_all(contents.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write settings to {:?}", path))?;
        }

        Ok(())
    }

    /// Store every override that is present.
    pub fn apply(&mut self, overrides: Overrides) {
        self.categories = self.categories_with(overrides);
    }

    /// Effective categories after applying overrides.
    pub fn categories_with(&self, overrides: Overrides) -> Categories {
        Categories {
            lowercase: overrides.lowercase.unwrap_or(self.categories.lowercase),
            uppercase: overrides.uppercase.unwrap_or(self.categories.uppercase),
            snippets: overrides.snippets.unwrap_or(self.categories.snippets),
        }
    }
}

/// Per-invocation category overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub lowercase: Option<bool>,
    pub uppercase: Option<bool>,
    pub snippets: Option<bool>,
}

impl Overrides {
    /// Returns true if no category was overridden.
    pub fn is_empty(&self) -> bool {
        self.lowercase.is_none() && self.uppercase.is_none() && self.snippets.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.categories, Categories::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.apply(Overrides {
            lowercase: None,
            uppercase: Some(true),
            snippets: Some(false),
        });
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "show_lowercase": true,
                "show_uppercase": true,
                "show_code_snippets": false
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        Settings::default().save_to(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides_is_empty() {
        assert!(Overrides::default().is_empty());
        assert!(!Overrides {
            snippets: Some(true),
            ..Overrides::default()
        }
        .is_empty());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = Settings::default();
        let categories = settings.categories_with(Overrides {
            lowercase: Some(false),
            uppercase: Some(true),
            snippets: None,
        });
        assert_eq!(
            categories,
            Categories {
                lowercase: false,
                uppercase: true,
                snippets: true,
            }
        );
    }

    #[test]
    fn test_apply_keeps_unset_categories() {
        let mut settings = Settings::default();
        settings.apply(Overrides {
            lowercase: Some(false),
            ..Overrides::default()
        });
        assert_eq!(
            settings.categories,
            Categories {
                lowercase: false,
                uppercase: false,
                snippets: true,
            }
        );

        settings.apply(Overrides {
            lowercase: Some(false),
            uppercase: Some(false),
            snippets: Some(false),
        });
        assert_eq!(settings.categories, Categories::NONE);
    }
}
