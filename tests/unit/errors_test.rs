use securevault::types::errors::*;

// === GeneratorError Tests ===

#[test]
fn generator_error_no_class_display() {
    let err = GeneratorError::NoCharacterClassSelected;
    assert_eq!(err.to_string(), "No character class selected");
}

#[test]
fn generator_error_length_display() {
    let err = GeneratorError::LengthOutOfRange { length: 200, min: 4, max: 128 };
    assert_eq!(err.to_string(), "Password length 200 out of range (4-128)");
}

#[test]
fn generator_error_from_crypto_error() {
    let err: GeneratorError = CryptoError::InvalidBound(0).into();
    assert_eq!(
        err,
        GeneratorError::RandomGeneration("Invalid random bound: 0".to_string())
    );
}

// === VaultError Tests ===

#[test]
fn vault_error_invalid_record_display() {
    let err = VaultError::InvalidCredentialRecord("Title and password are required".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid credential record: Title and password are required"
    );
}

#[test]
fn vault_error_not_found_display() {
    let err = VaultError::NotFound("abc-123".to_string());
    assert_eq!(err.to_string(), "Credential not found: abc-123");
}

#[test]
fn vault_error_unknown_category_display() {
    let err = VaultError::UnknownCategory("Travel".to_string());
    assert_eq!(err.to_string(), "Unknown category: Travel");
}

#[test]
fn vault_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(VaultError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === ClipboardError Tests ===

#[test]
fn clipboard_error_write_failed_display() {
    let err = ClipboardError::WriteFailed("xclip: not found".to_string());
    assert_eq!(err.to_string(), "Clipboard write failed: xclip: not found");
}

#[test]
fn clipboard_error_empty_display() {
    assert_eq!(ClipboardError::Empty.to_string(), "Nothing to copy");
}

// === CryptoError Tests ===

#[test]
fn crypto_error_random_generation_display() {
    let err = CryptoError::RandomGeneration("rng down".to_string());
    assert_eq!(err.to_string(), "Random generation failed: rng down");
}

#[test]
fn crypto_error_invalid_bound_display() {
    assert_eq!(CryptoError::InvalidBound(300).to_string(), "Invalid random bound: 300");
}

// === SettingsError Tests ===

#[test]
fn settings_error_io_display() {
    let err = SettingsError::IoError("permission denied".to_string());
    assert_eq!(err.to_string(), "Settings I/O error: permission denied");
}

#[test]
fn settings_error_serialization_display() {
    let err = SettingsError::SerializationError("bad json".to_string());
    assert_eq!(err.to_string(), "Settings serialization error: bad json");
}

#[test]
fn settings_error_invalid_key_display() {
    let err = SettingsError::InvalidKey("vault.color".to_string());
    assert_eq!(err.to_string(), "Invalid settings key: vault.color");
}

#[test]
fn settings_error_invalid_value_display() {
    let err = SettingsError::InvalidValue("expected bool".to_string());
    assert_eq!(err.to_string(), "Invalid settings value: expected bool");
}
