//! Tool settings
//!
//! Only settings for the tool itself live here (AI backend, logging).
//! Gradient configurations are never written to disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults;

/// Application-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Version of the settings format
    pub version: u32,
    /// Generative backend settings
    #[serde(default)]
    pub ai: AiSettings,
    /// Default log filter when neither `-d` nor `RUST_LOG` is given
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
    /// Seconds `--copy` keeps serving the clipboard on Linux, 0 to disable
    #[serde(default = "defaults::clipboard_hold_secs")]
    pub clipboard_hold_secs: u64,
}

impl AppSettings {
    /// Load settings from the platform config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&path)
    }

    /// How long the system clipboard is held after a copy, if at all
    pub fn clipboard_hold(&self) -> Option<Duration> {
        (self.clipboard_hold_secs > 0).then(|| Duration::from_secs(self.clipboard_hold_secs))
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "chromaflow", "chromaflow")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("settings.json"))
    }

    /// Load settings from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Save settings to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            ai: AiSettings::default(),
            log_level: defaults::log_level(),
            clipboard_hold_secs: defaults::clipboard_hold_secs(),
        }
    }
}

/// Generative backend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSettings {
    #[serde(default = "defaults::model")]
    pub model: String,
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
    /// Environment variable holding the API key
    #[serde(default = "defaults::api_key_env")]
    pub api_key_env: String,
}

impl AiSettings {
    /// Read the API key from `api_key_env`, falling back to `API_KEY`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        [self.api_key_env.as_str(), defaults::FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|name| lookup(name))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: defaults::model(),
            base_url: defaults::base_url(),
            api_key_env: defaults::api_key_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.ai.model = "gemini-2.0-flash".to_string();
        settings.save_to_path(&path).unwrap();

        let loaded = AppSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"version": 1, "ai": {"model": "x"}}"#).unwrap();
        assert_eq!(settings.ai.model, "x");
        assert_eq!(settings.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.ai.base_url, chromaflow_sources::DEFAULT_BASE_URL);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.clipboard_hold_secs, 10);
    }

    #[test]
    fn test_clipboard_hold() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.clipboard_hold(), Some(Duration::from_secs(10)));

        settings.clipboard_hold_secs = 0;
        assert_eq!(settings.clipboard_hold(), None);

        let settings: AppSettings =
            serde_json::from_str(r#"{"version": 1, "clipboard_hold_secs": 3}"#).unwrap();
        assert_eq!(settings.clipboard_hold(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_malformed_settings_error_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("settings.json"));
    }

    #[test]
    fn test_api_key_lookup_order() {
        let ai = AiSettings::default();

        let key = ai.resolve_api_key_with(|name| match name {
            "GEMINI_API_KEY" => Some("AIzaPrimary".to_string()),
            "API_KEY" => Some("AIzaFallback".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("AIzaPrimary"));

        let key = ai.resolve_api_key_with(|name| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "API_KEY" => Some("AIzaFallback".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("AIzaFallback"));

        assert_eq!(ai.resolve_api_key_with(|_| None), None);
    }
}
