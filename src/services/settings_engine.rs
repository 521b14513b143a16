// SecureVault Settings Engine
// Manages application settings: loading, saving, updating individual values, and resetting to defaults.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::AppSettings;

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "SECUREVAULT_CONFIG";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<AppSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &AppSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// Path resolution order: `path_override`, then `$SECUREVAULT_CONFIG`,
    /// then `settings.json` in the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| {
                platform::get_config_dir()
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            });

        Self {
            config_path,
            settings: AppSettings::default(),
        }
    }

    /// Creates an engine holding `settings` without touching the disk until saved.
    pub fn with_settings(path: String, settings: AppSettings) -> Self {
        Self {
            config_path: path,
            settings,
        }
    }
}

/// Domain rules that serde alone cannot express.
fn check_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    settings
        .generator
        .check_length()
        .map_err(|e| SettingsError::InvalidValue(format!("generator.length: {}", e)))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    /// A well-formed file with an out-of-range generator length is an invalid value.
    fn load(&mut self) -> Result<AppSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = AppSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: AppSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        check_settings(&settings)?;

        info!(path = %self.config_path, "settings loaded");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        debug!(path = %self.config_path, "settings saved");
        Ok(())
    }

    fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path and saves to disk.
    ///
    /// The settings are round-tripped through `serde_json::Value`, so a value of
    /// the wrong type is rejected when deserializing back into `AppSettings`.
    /// A rejected value leaves both the in-memory settings and the file untouched.
    ///
    /// # Examples
    /// - `"generator.length"` → updates `settings.generator.length`
    /// - `"clipboard.backend"` → updates `settings.clipboard.backend`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let (last, parents) = parts
                .split_last()
                .ok_or_else(|| SettingsError::InvalidKey("Key cannot be empty".to_string()))?;

            let mut current = &mut json_value;
            for part in parents {
                current = current.get_mut(*part).ok_or_else(|| {
                    SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
                })?;
            }

            match current {
                serde_json::Value::Object(map) if map.contains_key(*last) => {
                    map.insert(last.to_string(), value);
                }
                serde_json::Value::Object(_) => {
                    return Err(SettingsError::InvalidKey(format!(
                        "Key '{}' not found in settings",
                        key
                    )));
                }
                _ => {
                    return Err(SettingsError::InvalidKey(format!(
                        "Cannot navigate to key '{}': intermediate value is not an object",
                        key
                    )));
                }
            }
        }

        let new_settings: AppSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        check_settings(&new_settings)?;

        self.settings = new_settings;
        self.save()?;

        info!(key, "setting updated");
        Ok(())
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = AppSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
