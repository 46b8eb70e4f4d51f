/// Theme preference persistence
///
/// The preference file is a tiny `settings.toml` under the user's config
/// directory. Both values are stored as plain strings so the file stays
/// hand-editable:
///
/// ```toml
/// theme = "dark"        # or "light"
/// color_theme = "green" # one of the named palettes
/// ```
///
/// A missing file, unreadable TOML, or unrecognized values never produce an
/// error at startup; the caller falls back to defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "folio";

/// On-disk settings layout.
///
/// Both fields are optional: an older or hand-edited file may carry only
/// one of them, and either may hold a value the app no longer recognizes.
/// Interpretation (and fallback) happens in `state::theme`, not here.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Option<String>,
    pub color_theme: Option<String>,
}

/// Path of the settings file: `<config_dir>/folio/settings.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load the settings file, or defaults if it does not exist.
pub fn load() -> Config {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Config::default(),
    }
}

/// Persist the settings to the default location.
/// Returns Ok(()) without writing when no config directory exists.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Load settings from an explicit path. Unreadable or invalid files
/// degrade to defaults rather than erroring.
pub fn load_from_path(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Write settings to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let config = Config {
            theme: Some("dark".to_string()),
            color_theme: Some("burgundy".to_string()),
        };
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &path).expect("failed to save settings");
        let loaded = load_from_path(&path);

        assert_eq!(loaded.theme, config.theme);
        assert_eq!(loaded.color_theme, config.color_theme);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = = \"dark\"").expect("failed to write file");

        let loaded = load_from_path(&path);
        assert!(loaded.theme.is_none());
        assert!(loaded.color_theme.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let loaded = load_from_path(&dir.path().join("does-not-exist.toml"));
        assert!(loaded.theme.is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save should create directories");
        assert!(path.exists());
    }
}
