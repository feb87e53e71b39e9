// SPDX-License-Identifier: MPL-2.0
//! Process-wide widget settings, including loading and saving them from a
//! `tinymce.toml` file.
//!
//! Settings are constructed once at application startup and passed into the
//! widget by parameter; nothing in this crate reads them through ambient
//! global state. They are read-only at render time.
//!
//! # Path Resolution
//!
//! The settings file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `TINYMCE_WIDGET_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

use crate::editor_config::{CallbackRegistry, EditorConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "tinymce.toml";
const APP_NAME: &str = "tinymce-widget";
const CONFIG_DIR_ENV: &str = "TINYMCE_WIDGET_CONFIG_DIR";

/// Static widget settings: asset URLs, feature flags, the default editor
/// profile, and caller-registered client callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL of the TinyMCE JavaScript bundle.
    pub js_url: String,
    /// URL of the widget stylesheet; `None` falls back to the
    /// `tinymce-css` named route at media-collection time.
    pub css_url: Option<String>,
    /// Enables spellchecker configuration and the default spellchecker
    /// callback.
    pub use_spellchecker: bool,
    /// Enables the file-browser asset and the default file-browser callback.
    pub use_filebrowser: bool,
    /// The static default editor profile, merged over the locale fragment.
    pub default_config: EditorConfig,
    /// Client-side callbacks; well-known slots set here win over the
    /// built-in defaults.
    pub callbacks: CallbackRegistry,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            js_url: defaults::DEFAULT_JS_URL.to_string(),
            css_url: None,
            use_spellchecker: false,
            use_filebrowser: false,
            default_config: defaults::default_editor_config(),
            callbacks: CallbackRegistry::new(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut settings = Settings {
            js_url: "/assets/tinymce/tinymce.min.js".to_string(),
            css_url: Some("/assets/tinymce/widget.css".to_string()),
            use_spellchecker: true,
            use_filebrowser: false,
            ..Settings::default()
        };
        settings.callbacks.set("setup", "mySetup");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("tinymce.toml");

        save_to_path(&settings, &config_path).expect("failed to save settings");
        let loaded = load_from_path(&config_path).expect("failed to load settings");

        assert_eq!(loaded.js_url, settings.js_url);
        assert_eq!(loaded.css_url, settings.css_url);
        assert!(loaded.use_spellchecker);
        assert!(!loaded.use_filebrowser);
        assert_eq!(loaded.callbacks.get("setup"), Some("mySetup"));
        assert_eq!(
            loaded.default_config.get("selector"),
            Some(&json!(defaults::DEFAULT_SELECTOR))
        );
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("tinymce.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.js_url, defaults::DEFAULT_JS_URL);
        assert!(loaded.css_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("tinymce.toml");

        save_to_path(&Settings::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_settings_disable_optional_features() {
        let settings = Settings::default();
        assert!(!settings.use_spellchecker);
        assert!(!settings.use_filebrowser);
        assert!(settings.callbacks.is_empty());
        assert!(!settings.default_config.is_empty());
    }
}
