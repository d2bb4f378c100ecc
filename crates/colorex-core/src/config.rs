//! User settings stored as `settings.yaml` in the colorex config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// All fields are optional in the file; missing values use defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between redraw ticks.
    pub frame_delay_ms: u64,
    /// Minimum interval between two clipboard writes.
    pub click_debounce_ms: u64,
    /// Initial state of the "always on top" checkbox.
    pub always_on_top: bool,
    /// egui key name that toggles pause (e.g. "Space", "P").
    pub pause_key: String,
    pub topmost: TopmostSettings,
}

/// Startup discovery of the native window handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopmostSettings {
    pub attempts: u32,
    pub backoff_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_delay_ms: 10,
            click_debounce_ms: 250,
            always_on_top: true,
            pause_key: "Space".to_string(),
            topmost: TopmostSettings::default(),
        }
    }
}

impl Default for TopmostSettings {
    fn default() -> Self {
        Self {
            attempts: 5,
            backoff_ms: 500,
        }
    }
}

impl Settings {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn click_debounce(&self) -> Duration {
        Duration::from_millis(self.click_debounce_ms)
    }
}

impl TopmostSettings {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// Platform config directory for colorex.
pub fn config_dir() -> PathBuf {
    let base = dirs_next::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("colorex")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.yaml")
}

pub fn log_dir() -> PathBuf {
    config_dir().join("logs")
}

pub fn parse_settings(content: &str) -> ConfigResult<Settings> {
    // An empty document deserializes to unit, not to a mapping.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_settings_from(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Load settings from the default location, falling back to defaults when
/// the file is missing or invalid.
pub fn load_settings() -> Settings {
    let path = settings_path();

    if !path.exists() {
        debug!(?path, "No settings file, using defaults");
        return Settings::default();
    }

    match load_settings_from(&path) {
        Ok(settings) => {
            info!(?path, "Loaded settings");
            settings
        }
        Err(error) => {
            warn!(?path, %error, "Failed to load settings, using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings_to(path: impl AsRef<Path>, settings: &Settings) -> ConfigResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
            info!(?dir, "Created config directory");
        }
    }

    fs::write(path, serde_yaml::to_string(settings)?)?;
    info!(?path, "Saved settings");
    Ok(())
}

/// Save settings to the default location.
pub fn save_settings(settings: &Settings) -> ConfigResult<PathBuf> {
    let path = settings_path();
    save_settings_to(&path, settings)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.frame_delay(), Duration::from_millis(10));
        assert_eq!(settings.click_debounce(), Duration::from_millis(250));
        assert!(settings.always_on_top);
        assert_eq!(settings.pause_key, "Space");
        assert_eq!(settings.topmost.attempts, 5);
        assert_eq!(settings.topmost.backoff(), Duration::from_millis(500));
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
        assert_eq!(parse_settings("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = "always_on_top: false\ntopmost:\n  attempts: 2\n";
        let settings = parse_settings(yaml).unwrap();

        assert!(!settings.always_on_top);
        assert_eq!(settings.topmost.attempts, 2);
        assert_eq!(settings.topmost.backoff_ms, 500);
        assert_eq!(settings.click_debounce_ms, 250);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(matches!(
            parse_settings("frame_delay_ms: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_saved_settings_load_back() {
        let dir = std::env::temp_dir().join(format!("colorex-config-{}", std::process::id()));
        let path = dir.join("nested").join("settings.yaml");
        let settings = Settings {
            pause_key: "P".into(),
            frame_delay_ms: 16,
            ..Settings::default()
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("colorex-missing-settings.yaml");
        assert!(matches!(load_settings_from(path), Err(ConfigError::Io(_))));
    }
}
