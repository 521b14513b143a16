//! Property-based tests for the password generator.
//!
//! These tests verify, for arbitrary configurations, that generated passwords
//! have the requested length, draw only from the configured alphabet, honour
//! `exclude_similar`, and that an empty selection never yields a password.

use securevault::services::password_generator::{
    build_alphabet, evaluate_strength, score_password, PasswordGenerator, PasswordGeneratorTrait,
    SIMILAR_CHARACTERS,
};
use securevault::types::errors::GeneratorError;
use securevault::types::generator::{GeneratorConfig, PasswordStrength};
use proptest::prelude::*;

/// Configurations with at least one character class and a valid length.
fn arb_valid_config() -> impl Strategy<Value = GeneratorConfig> {
    (
        4usize..=128,
        any::<[bool; 4]>().prop_filter("at least one class", |c| c.iter().any(|b| *b)),
        any::<bool>(),
    )
        .prop_map(|(length, [upper, lower, numbers, symbols], exclude_similar)| GeneratorConfig {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            exclude_similar,
        })
}

// **Property: length and alphabet membership**
//
// *For any* configuration with at least one class and 4 <= length <= 128,
// the password has exactly `length` characters, each in the alphabet.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn generated_password_matches_config(config in arb_valid_config()) {
        let generator = PasswordGenerator::new();
        let alphabet = build_alphabet(&config);

        let password = generator.generate(&config).expect("valid config must generate");

        prop_assert_eq!(password.chars().count(), config.length);
        for c in password.chars() {
            prop_assert!(alphabet.contains(&c), "'{}' not in alphabet", c);
        }
        if config.exclude_similar {
            prop_assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(&c)));
        }
    }
}

// **Property: empty selection fails**
//
// *For any* length and `exclude_similar`, disabling every class fails with
// `NoCharacterClassSelected` (or a length error when the length is also bad).
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn no_classes_never_generates(length in 4usize..=128, exclude_similar in any::<bool>()) {
        let generator = PasswordGenerator::new();
        let config = GeneratorConfig {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar,
        };

        prop_assert_eq!(generator.generate(&config), Err(GeneratorError::NoCharacterClassSelected));
    }
}

// **Property: strength score bounds**
//
// *For any* non-empty string the score is at most 6 and the bucket is never `None`.
proptest! {
    #[test]
    fn strength_of_nonempty_is_bucketed(password in "\\PC{1,40}") {
        prop_assert!(score_password(&password) <= 6);
        prop_assert_ne!(evaluate_strength(&password), PasswordStrength::None);
    }

    #[test]
    fn appending_never_lowers_score(base in "[ -~]{0,20}", extra in "[ -~]{1,10}") {
        let longer = format!("{base}{extra}");
        prop_assert!(score_password(&longer) >= score_password(&base));
    }
}
