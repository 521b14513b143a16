//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, key validation, and reset.

use securevault::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securevault::types::credential::Category;
use securevault::types::errors::SettingsError;
use securevault::types::settings::{AppSettings, ClipboardBackendKind};
use serde_json::json;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.generator.length, 16);
    assert!(settings.vault.seed_sample_data);
    assert_eq!(settings.clipboard.backend, ClipboardBackendKind::System);
}

/// A change made through `set_value` is visible to a fresh engine reading the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("generator.length", json!(24)).unwrap();
        engine.set_value("vault.default_category", json!("Work")).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.generator.length, 24);
    assert_eq!(settings.vault.default_category, Category::Work);
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("vault.color", json!("red"));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));

    let result = engine.set_value("", json!(1));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));
}

/// A value of the wrong type is rejected and the previous settings stay in place.
#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("generator.include_symbols", json!("yes"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert!(engine.get_settings().generator.include_symbols);

    let result = engine.set_value("clipboard.backend", json!("Carrier pigeon"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_set_value_accepts_clipboard_command() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    engine
        .set_value("clipboard.command", json!(["xsel", "--clipboard", "--input"]))
        .unwrap();
    engine.set_value("clipboard.backend", json!("Memory")).unwrap();

    let clipboard = &engine.get_settings().clipboard;
    assert_eq!(clipboard.backend, ClipboardBackendKind::Memory);
    assert_eq!(clipboard.command.as_ref().map(|c| c.len()), Some(3));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("logging.filter", json!("securevault=trace")).unwrap();

    engine.reset().unwrap();

    assert_eq!(*engine.get_settings(), AppSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

/// Older or hand-written files may omit whole sections; missing fields fall back to defaults.
#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"generator": {"length": 32, "exclude_similar": true}}"#,
    )
    .unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();
    assert_eq!(settings.generator.length, 32);
    assert!(settings.generator.exclude_similar);
    assert!(settings.generator.include_uppercase);
    assert_eq!(settings.vault, AppSettings::default().vault);
}

/// An out-of-range generator length is refused before anything is stored.
#[test]
fn test_set_value_rejects_out_of_range_length() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("generator.length", json!(24)).unwrap();

    for length in [500, 3, 0] {
        let result = engine.set_value("generator.length", json!(length));
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))), "length {}", length);
    }

    assert_eq!(engine.get_settings().generator.length, 24);
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap().generator.length, 24);
}

#[test]
fn test_load_rejects_out_of_range_length() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"generator": {"length": 500}}"#).unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();

    assert!(path.exists());
    assert_eq!(engine.get_config_path(), path.to_string_lossy());
}
