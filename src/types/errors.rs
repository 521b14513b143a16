use thiserror::Error;

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Every character class is disabled, so the alphabet is empty.
    #[error("No character class selected")]
    NoCharacterClassSelected,
    /// The requested length is outside the supported range.
    #[error("Password length {length} out of range ({min}-{max})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
    /// The random source failed.
    #[error("Random generation failed: {0}")]
    RandomGeneration(String),
}

// === VaultError ===

/// Errors related to credential vault operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VaultError {
    /// The record is missing a required field (title or password).
    #[error("Invalid credential record: {0}")]
    InvalidCredentialRecord(String),
    /// Credential with the given ID was not found.
    #[error("Credential not found: {0}")]
    NotFound(String),
    /// The provided category name is not one of the known categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

// === ClipboardError ===

/// Errors related to clipboard access.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Writing to the clipboard failed.
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
    /// There is nothing to copy.
    #[error("Nothing to copy")]
    Empty,
}

// === CryptoError ===

/// Errors related to the secure random source.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Failed to generate random bytes.
    #[error("Random generation failed: {0}")]
    RandomGeneration(String),
    /// A random index was requested from an empty range.
    #[error("Invalid random bound: {0}")]
    InvalidBound(usize),
}

impl From<CryptoError> for GeneratorError {
    fn from(err: CryptoError) -> Self {
        GeneratorError::RandomGeneration(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
