//! Front-end settings persistence
//!
//! Stores user preferences in `squirrel.yaml` under the Rime user directory
//! (`~/Library/Rime/squirrel.yaml` on macOS).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chord::DEFAULT_CHORD_DURATION;
use crate::keybinding::{parse_key_bindings, KeyBinding, KeyBindingConfig};
use crate::keycode::KeyNameError;

/// Errors from reading or writing settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("key binding #{index}, {field}: {source}")]
    InvalidKeyBinding {
        index: usize,
        field: &'static str,
        #[source]
        source: KeyNameError,
    },
    #[error("no Rime user directory available")]
    NoUserDir,
}

/// When to show notifications such as schema switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPolicy {
    Always,
    #[default]
    Appropriate,
    Never,
}

/// Front-end settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquirrelSettings {
    /// Keyboard layout forced while Rime is active, or `"last"` to keep the current one
    #[serde(default = "default_keyboard_layout")]
    pub keyboard_layout: String,

    /// Seconds a chord waits for more keys
    #[serde(default = "default_chord_duration")]
    pub chord_duration: f64,

    #[serde(default)]
    pub show_notifications_when: NotificationPolicy,

    /// Per-application engine options, keyed by bundle identifier
    #[serde(default)]
    pub app_options: BTreeMap<String, BTreeMap<String, bool>>,

    /// User key bindings, merged over the defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_bindings: Vec<KeyBindingConfig>,
}

fn default_keyboard_layout() -> String {
    "last".to_string()
}

fn default_chord_duration() -> f64 {
    DEFAULT_CHORD_DURATION.as_secs_f64()
}

impl Default for SquirrelSettings {
    fn default() -> Self {
        Self {
            keyboard_layout: default_keyboard_layout(),
            chord_duration: default_chord_duration(),
            show_notifications_when: NotificationPolicy::default(),
            app_options: BTreeMap::new(),
            key_bindings: Vec::new(),
        }
    }
}

impl SquirrelSettings {
    /// Parse settings from YAML. An empty document gives the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Option<Self> = serde_yaml::from_str(yaml)?;
        Ok(settings.unwrap_or_default())
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load settings from the Rime user directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::settings_file() else {
            tracing::debug!("No Rime user directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the Rime user directory
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = crate::config_paths::settings_file().ok_or(ConfigError::NoUserDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(io_error)?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Engine options for an application, e.g. `ascii_mode` for a terminal
    pub fn app_options_for(&self, bundle_id: &str) -> Option<&BTreeMap<String, bool>> {
        self.app_options.get(bundle_id)
    }

    /// Chord duration; non-positive or non-finite values give the default
    pub fn chord_duration(&self) -> Duration {
        if self.chord_duration.is_finite() && self.chord_duration > 0.0 {
            Duration::try_from_secs_f64(self.chord_duration).unwrap_or(DEFAULT_CHORD_DURATION)
        } else {
            DEFAULT_CHORD_DURATION
        }
    }

    /// User key bindings with key names resolved
    pub fn key_bindings(&self) -> Result<Vec<KeyBinding>, ConfigError> {
        parse_key_bindings(&self.key_bindings)
    }

    /// Whether notifications are shown at all
    pub fn notifications_enabled(&self) -> bool {
        self.show_notifications_when != NotificationPolicy::Never
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinding::Condition;

    #[test]
    fn test_defaults() {
        let settings = SquirrelSettings::default();
        assert_eq!(settings.keyboard_layout, "last");
        assert_eq!(settings.chord_duration(), Duration::from_millis(100));
        assert_eq!(
            settings.show_notifications_when,
            NotificationPolicy::Appropriate
        );
        assert!(settings.notifications_enabled());
        assert!(settings.key_bindings().unwrap().is_empty());
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(
            SquirrelSettings::from_yaml("").unwrap(),
            SquirrelSettings::default()
        );
        assert_eq!(
            SquirrelSettings::from_yaml("{}").unwrap(),
            SquirrelSettings::default()
        );
    }

    #[test]
    fn test_parse_full_settings() {
        let yaml = r#"
keyboard_layout: com.apple.keylayout.ABC
chord_duration: 0.25
show_notifications_when: never
app_options:
  com.apple.Terminal:
    ascii_mode: true
key_bindings:
  - { when: has_menu, accept: "minus", send: "Page_Up" }
"#;
        let settings = SquirrelSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.keyboard_layout, "com.apple.keylayout.ABC");
        assert_eq!(settings.chord_duration(), Duration::from_millis(250));
        assert!(!settings.notifications_enabled());

        let terminal = settings.app_options_for("com.apple.Terminal").unwrap();
        assert_eq!(terminal.get("ascii_mode"), Some(&true));
        assert!(settings.app_options_for("com.apple.Safari").is_none());

        let bindings = settings.key_bindings().unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].when, Condition::HasMenu);
    }

    #[test]
    fn test_non_positive_chord_duration_ignored() {
        for value in ["0", "-1.5", ".nan"] {
            let settings =
                SquirrelSettings::from_yaml(&format!("chord_duration: {}", value)).unwrap();
            assert_eq!(settings.chord_duration(), DEFAULT_CHORD_DURATION, "{}", value);
        }
    }

    #[test]
    fn test_bad_notification_policy_is_error() {
        assert!(matches!(
            SquirrelSettings::from_yaml("show_notifications_when: sometimes"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings = SquirrelSettings::from_yaml("style:\n  color_scheme: aqua\n").unwrap();
        assert_eq!(settings, SquirrelSettings::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut settings = SquirrelSettings::default();
        settings.chord_duration = 0.3;
        settings
            .app_options
            .entry("org.vim.MacVim".to_string())
            .or_default()
            .insert("vim_mode".to_string(), true);

        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert_eq!(SquirrelSettings::from_yaml(&yaml).unwrap(), settings);
    }
}
