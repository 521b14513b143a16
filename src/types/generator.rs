use serde::{Deserialize, Serialize};

use super::errors::GeneratorError;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Options for generating a random password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Strip `i l 1 L o 0 O` from the alphabet.
    pub exclude_similar: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

impl GeneratorConfig {
    /// Returns true if at least one character class is enabled.
    pub fn has_character_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }

    /// Rejects a length outside `MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH`.
    pub fn check_length(&self) -> Result<(), GeneratorError> {
        if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            Ok(())
        } else {
            Err(GeneratorError::LengthOutOfRange {
                length: self.length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            })
        }
    }
}

/// Advisory strength bucket for a password.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Maps a heuristic score (0..=6) to a bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Fair,
            5 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::None => "None",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Fill level of the strength meter, in percent.
    pub fn percent(&self) -> u8 {
        match self {
            PasswordStrength::None => 0,
            PasswordStrength::Weak => 25,
            PasswordStrength::Fair => 50,
            PasswordStrength::Good => 75,
            PasswordStrength::Strong => 100,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::None => "gray",
            PasswordStrength::Weak => "red",
            PasswordStrength::Fair => "yellow",
            PasswordStrength::Good => "blue",
            PasswordStrength::Strong => "green",
        }
    }
}
