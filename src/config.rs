//! Startup settings for the facades
//!
//! Settings are read from JSON or YAML and applied to a [`crate::Facades`]
//! instance once during startup. Every field is optional; an empty document
//! yields the built-in defaults.

use crate::{
    constants::{DEFAULT_NOTIFY_DURATION_MS, SETTINGS_JSON_EXTENSIONS, SETTINGS_YAML_EXTENSIONS},
    error::{Error, Result},
    locale::{Labels, Locale},
    notify::NotifyDefaults,
    types::Position,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Overrides for the locale's default labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub ok: Option<String>,
    pub cancel: Option<String>,
    pub detail: Option<String>,
    pub debug_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeSettings {
    pub enabled: bool,
}

impl Default for FacadeSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Settings of the facades that have a debug mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebuggableSettings {
    pub enabled: bool,
    pub debug: bool,
}

impl Default for DebuggableSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifySettings {
    pub enabled: bool,
    pub debug: bool,
    pub position: Position,
    /// Display time in milliseconds, `0` keeps notifications on screen
    pub duration_ms: u64,
    pub closeable: bool,
    pub show_detail: bool,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            position: Position::default(),
            duration_ms: DEFAULT_NOTIFY_DURATION_MS,
            closeable: true,
            show_detail: false,
        }
    }
}

impl NotifySettings {
    pub fn defaults(&self) -> NotifyDefaults {
        NotifyDefaults {
            position: self.position,
            duration: Duration::from_millis(self.duration_ms),
            closeable: self.closeable,
            show_detail: self.show_detail,
        }
    }
}

/// Main settings structure for all facades
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub labels: LabelOverrides,
    pub alert: DebuggableSettings,
    pub confirm: FacadeSettings,
    pub prompt: FacadeSettings,
    pub notify: NotifySettings,
    pub loading: FacadeSettings,
}

impl Settings {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a file, picking the format from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if SETTINGS_JSON_EXTENSIONS.contains(&extension.as_str()) {
            let content = std::fs::read_to_string(path)?;
            Self::from_json_str(&content)
        } else if SETTINGS_YAML_EXTENSIONS.contains(&extension.as_str()) {
            let content = std::fs::read_to_string(path)?;
            Self::from_yaml_str(&content)
        } else {
            Err(Error::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn validate(&self) -> Result<()> {
        let overrides = [
            ("ok", &self.labels.ok),
            ("cancel", &self.labels.cancel),
            ("detail", &self.labels.detail),
            ("debug_title", &self.labels.debug_title),
        ];
        for (name, value) in overrides {
            if value.as_deref().is_some_and(|label| label.trim().is_empty()) {
                return Err(Error::ConfigValidation(format!("label '{name}' must not be empty")));
            }
        }
        Ok(())
    }

    /// Locale labels with the configured overrides applied.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::for_locale(self.locale);
        let overrides = self.labels.clone();
        if let Some(ok) = overrides.ok {
            labels.ok = ok;
        }
        if let Some(cancel) = overrides.cancel {
            labels.cancel = cancel;
        }
        if let Some(detail) = overrides.detail {
            labels.detail = detail;
        }
        if let Some(debug_title) = overrides.debug_title {
            labels.debug_title = debug_title;
        }
        labels
    }
}
