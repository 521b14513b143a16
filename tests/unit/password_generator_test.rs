//! Unit tests for the PasswordGenerator and the strength heuristic.
//!
//! Generation is random, so assertions check shape (length, alphabet
//! membership) rather than exact output.

use rstest::rstest;

use securevault::services::password_generator::{
    build_alphabet, evaluate_strength, score_password, PasswordGenerator, PasswordGeneratorTrait,
    DIGITS, LOWERCASE, SIMILAR_CHARACTERS, SYMBOLS, UPPERCASE,
};
use securevault::types::errors::GeneratorError;
use securevault::types::generator::{GeneratorConfig, PasswordStrength};

fn only(upper: bool, lower: bool, numbers: bool, symbols: bool) -> GeneratorConfig {
    GeneratorConfig {
        length: 32,
        include_uppercase: upper,
        include_lowercase: lower,
        include_numbers: numbers,
        include_symbols: symbols,
        exclude_similar: false,
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_generates_sixteen_characters() {
    let generator = PasswordGenerator::new();
    let password = generator.generate(&GeneratorConfig::default()).unwrap();
    assert_eq!(password.chars().count(), 16);
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(16)]
#[case(64)]
#[case(128)]
fn test_generated_length_matches_config(#[case] length: usize) {
    let generator = PasswordGenerator::new();
    let config = GeneratorConfig { length, ..GeneratorConfig::default() };
    assert_eq!(generator.generate(&config).unwrap().chars().count(), length);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(129)]
#[case(1000)]
fn test_length_out_of_range_is_rejected(#[case] length: usize) {
    let generator = PasswordGenerator::new();
    let config = GeneratorConfig { length, ..GeneratorConfig::default() };
    assert_eq!(
        generator.generate(&config),
        Err(GeneratorError::LengthOutOfRange { length, min: 4, max: 128 })
    );
}

#[test]
fn test_no_character_class_is_rejected() {
    let generator = PasswordGenerator::new();
    let config = only(false, false, false, false);
    assert!(!config.has_character_class());
    assert_eq!(generator.generate(&config), Err(GeneratorError::NoCharacterClassSelected));
}

#[rstest]
#[case(only(true, false, false, false))]
#[case(only(false, false, false, true))]
#[case(GeneratorConfig::default())]
fn test_any_enabled_class_counts(#[case] config: GeneratorConfig) {
    assert!(config.has_character_class());
}

/// Length is checked before the class selection.
#[test]
fn test_check_length_runs_first() {
    let config = GeneratorConfig { length: 500, ..only(false, false, false, false) };
    let expected = || GeneratorError::LengthOutOfRange { length: 500, min: 4, max: 128 };
    assert_eq!(config.check_length(), Err(expected()));
    assert_eq!(PasswordGenerator::new().generate(&config), Err(expected()));
}

/// exclude_similar on its own does not count as a class.
#[test]
fn test_exclude_similar_alone_is_rejected() {
    let generator = PasswordGenerator::new();
    let config = GeneratorConfig { exclude_similar: true, ..only(false, false, false, false) };
    assert_eq!(generator.generate(&config), Err(GeneratorError::NoCharacterClassSelected));
}

#[rstest]
#[case(only(true, false, false, false), UPPERCASE)]
#[case(only(false, true, false, false), LOWERCASE)]
#[case(only(false, false, true, false), DIGITS)]
#[case(only(false, false, false, true), SYMBOLS)]
fn test_single_class_draws_only_from_that_class(#[case] config: GeneratorConfig, #[case] class: &str) {
    let generator = PasswordGenerator::new();
    let password = generator.generate(&config).unwrap();
    assert!(password.chars().all(|c| class.contains(c)), "{password} outside {class}");
}

#[test]
fn test_exclude_similar_never_emits_lookalikes() {
    let generator = PasswordGenerator::new();
    let config = GeneratorConfig { length: 128, exclude_similar: true, ..GeneratorConfig::default() };
    for _ in 0..20 {
        let password = generator.generate(&config).unwrap();
        assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(&c)));
    }
}

#[test]
fn test_consecutive_passwords_differ() {
    let generator = PasswordGenerator::new();
    let config = GeneratorConfig { length: 32, ..GeneratorConfig::default() };
    let a = generator.generate(&config).unwrap();
    let b = generator.generate(&config).unwrap();
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

#[test]
fn test_alphabet_keeps_class_order() {
    let alphabet: String = build_alphabet(&GeneratorConfig::default()).into_iter().collect();
    assert_eq!(alphabet, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"));
}

#[test]
fn test_alphabet_digits_without_similar() {
    let config = GeneratorConfig { exclude_similar: true, ..only(false, false, true, false) };
    let alphabet: String = build_alphabet(&config).into_iter().collect();
    assert_eq!(alphabet, "23456789");
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

#[rstest]
#[case("", 0)]
#[case("abc", 1)]
#[case("abcdefgh", 2)]
#[case("abcdefgh1", 3)]
#[case("Abcdefgh1", 4)]
#[case("Abcdefgh1!", 5)]
#[case("Abcdefgh1!xy", 6)]
#[case("!!!!", 1)]
fn test_score_password(#[case] password: &str, #[case] expected: u8) {
    assert_eq!(score_password(password), expected, "score for {password:?}");
}

#[rstest]
#[case("", PasswordStrength::None, 0, "gray")]
#[case("abc", PasswordStrength::Weak, 25, "red")]
#[case("abcdefgh", PasswordStrength::Weak, 25, "red")]
#[case("abcdefgh1", PasswordStrength::Fair, 50, "yellow")]
#[case("Abcdefgh1", PasswordStrength::Fair, 50, "yellow")]
#[case("Abcdefgh1!", PasswordStrength::Good, 75, "blue")]
#[case("Abcdefgh1!xy", PasswordStrength::Strong, 100, "green")]
fn test_strength_buckets(
    #[case] password: &str,
    #[case] expected: PasswordStrength,
    #[case] percent: u8,
    #[case] color: &str,
) {
    let strength = evaluate_strength(password);
    assert_eq!(strength, expected);
    assert_eq!(strength.percent(), percent);
    assert_eq!(strength.color(), color);
}

#[test]
fn test_sample_passwords_are_strong() {
    for secret in ["SuperSecure123!", "MySecretPass456#", "StreamingLife789$"] {
        assert_eq!(evaluate_strength(secret), PasswordStrength::Strong, "{secret}");
    }
}

#[test]
fn test_trait_strength_matches_free_function() {
    let generator = PasswordGenerator::new();
    assert_eq!(generator.evaluate_strength("Abcdefgh1!"), evaluate_strength("Abcdefgh1!"));
}
