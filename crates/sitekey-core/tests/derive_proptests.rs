#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the derivation pipeline.
//!
//! All properties run with small Argon2id test parameters — the properties
//! under test (determinism, injectivity, policy compliance) are independent
//! of the cost setting.

use proptest::prelude::*;
use sitekey_core::{
    Argon2idParams, CharClasses, DerivationOptions, Engine, PassphraseOptions, PassphraseStyle,
};

/// Small params for fast property tests.
const PROP_PARAMS: Argon2idParams = Argon2idParams {
    m_cost: 32,
    t_cost: 1,
    p_cost: 1,
};

fn prop_engine() -> Engine {
    Engine::new().with_params(PROP_PARAMS)
}

/// Strategy for a valid (non-empty) input string, including non-ASCII.
fn input_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 àéîőū._-]{1,24}"
}

proptest! {
    /// Identical inputs always produce the identical password.
    #[test]
    fn derive_is_deterministic(
        secret in input_text(),
        site in input_text(),
    ) {
        let engine = prop_engine();
        let options = DerivationOptions::default();
        let a = engine.derive(&secret, &site, &options).expect("derive should succeed");
        let b = engine.derive(&secret, &site, &options).expect("derive should succeed");
        prop_assert_eq!(a, b);
    }

    /// The output always has the requested length and satisfies the
    /// per-class minimums for every enabled class.
    #[test]
    fn derive_complies_with_policy(
        secret in input_text(),
        site in input_text(),
        length in 8usize..=40,
        min_per_class in 0usize..=2,
        upper in any::<bool>(),
        digit in any::<bool>(),
        symbol in any::<bool>(),
    ) {
        let classes = CharClasses { lower: true, upper, digit, symbol };
        let options = DerivationOptions { length, classes, min_per_class };
        let pw = prop_engine().derive(&secret, &site, &options).expect("derive should succeed");

        prop_assert_eq!(pw.chars().count(), length);
        let lower_count = pw.chars().filter(char::is_ascii_lowercase).count();
        let upper_count = pw.chars().filter(char::is_ascii_uppercase).count();
        let digit_count = pw.chars().filter(char::is_ascii_digit).count();
        let symbol_count = pw.chars().filter(|c| !c.is_ascii_alphanumeric()).count();

        prop_assert!(lower_count >= min_per_class);
        if upper {
            prop_assert!(upper_count >= min_per_class);
        } else {
            prop_assert_eq!(upper_count, 0);
        }
        if digit {
            prop_assert!(digit_count >= min_per_class);
        } else {
            prop_assert_eq!(digit_count, 0);
        }
        if symbol {
            prop_assert!(symbol_count >= min_per_class);
        } else {
            prop_assert_eq!(symbol_count, 0);
        }
    }

    /// Moving characters across the secret/site boundary changes the
    /// output: the combined encoding is injective.
    #[test]
    fn split_point_changes_output(
        word in "[a-z]{4,12}",
        site_suffix in "[a-z]{1,8}",
    ) {
        let engine = prop_engine();
        let options = DerivationOptions::default();
        // Split `word || site_suffix` at two different boundaries.
        let full: String = format!("{word}{site_suffix}");
        let a = engine
            .derive(&full[..word.len()], &full[word.len()..], &options)
            .expect("derive should succeed");
        let b = engine
            .derive(&full[..word.len() - 1], &full[word.len() - 1..], &options)
            .expect("derive should succeed");
        prop_assert_ne!(a, b);
    }

    /// Passphrases always contain exactly the requested number of words.
    #[test]
    fn passphrase_word_count_is_exact(
        secret in input_text(),
        site in input_text(),
        word_count in 2usize..=10,
    ) {
        let options = PassphraseOptions {
            word_count,
            style: PassphraseStyle::Separator("-".to_owned()),
        };
        let pp = prop_engine()
            .derive_passphrase(&secret, &site, &options)
            .expect("derive_passphrase should succeed");
        prop_assert_eq!(pp.split('-').count(), word_count);
    }

    /// Options survive a serde round-trip and derive identically after it.
    #[test]
    fn options_roundtrip_preserves_output(
        secret in input_text(),
        site in input_text(),
        length in 8usize..=32,
    ) {
        let options = DerivationOptions { length, ..DerivationOptions::default() };
        let json = serde_json::to_string(&options).expect("serialize should succeed");
        let restored: DerivationOptions =
            serde_json::from_str(&json).expect("deserialize should succeed");

        let engine = prop_engine();
        let a = engine.derive(&secret, &site, &options).expect("derive should succeed");
        let b = engine.derive(&secret, &site, &restored).expect("derive should succeed");
        prop_assert_eq!(a, b);
    }
}
