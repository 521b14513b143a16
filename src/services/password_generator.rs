//! Password generator for SecureVault.
//!
//! Builds an alphabet from the enabled character classes, draws characters
//! from it with a cryptographically secure random source, and scores results
//! with an advisory strength heuristic.

use tracing::debug;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::errors::GeneratorError;
use crate::types::generator::{GeneratorConfig, PasswordStrength};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters removed when `exclude_similar` is set.
pub const SIMILAR_CHARACTERS: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O'];

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    fn generate(&self, config: &GeneratorConfig) -> Result<String, GeneratorError>;
    fn evaluate_strength(&self, password: &str) -> PasswordStrength;
}

/// Password generator backed by `CryptoService`.
pub struct PasswordGenerator {
    crypto: CryptoService,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            crypto: CryptoService::new(),
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenates the enabled classes in fixed order (upper, lower, digits, symbols),
/// then strips similar-looking characters if requested.
pub fn build_alphabet(config: &GeneratorConfig) -> Vec<char> {
    let classes = [
        (config.include_uppercase, UPPERCASE),
        (config.include_lowercase, LOWERCASE),
        (config.include_numbers, DIGITS),
        (config.include_symbols, SYMBOLS),
    ];

    classes
        .iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .filter(|c| !(config.exclude_similar && SIMILAR_CHARACTERS.contains(c)))
        .collect()
}

/// Heuristic score from 0 to 6.
pub fn score_password(password: &str) -> u8 {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

/// Advisory strength of a password; `None` for an empty string.
pub fn evaluate_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::None;
    }
    PasswordStrength::from_score(score_password(password))
}

impl PasswordGeneratorTrait for PasswordGenerator {
    fn generate(&self, config: &GeneratorConfig) -> Result<String, GeneratorError> {
        config.check_length()?;
        if !config.has_character_class() {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        let alphabet = build_alphabet(config);

        let indices = self.crypto.random_indices(alphabet.len(), config.length)?;
        debug!(length = config.length, alphabet = alphabet.len(), "generated password");
        Ok(indices.into_iter().map(|i| alphabet[i]).collect())
    }

    fn evaluate_strength(&self, password: &str) -> PasswordStrength {
        evaluate_strength(password)
    }
}
