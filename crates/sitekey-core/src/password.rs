//! Character-policy output encoding.
//!
//! Maps the key-material stream onto the requested alphabet and length:
//! `min_per_class` mandatory characters are drawn for each enabled class,
//! the remaining positions are filled from the pooled alphabet, and the
//! result is Fisher–Yates shuffled — every index driven by uniform
//! rejection sampling over the stream, so the composition carries no
//! positional or modulo bias.

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;
use crate::stream::KeyStream;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed password length.
pub const MIN_LENGTH: usize = 4;

/// Maximum allowed password length.
pub const MAX_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Stream domain-separation context for character passwords.
pub(crate) const STREAM_CONTEXT: &str = "sitekey-core v1 password";

// Character sets. Their content and the lower/upper/digit/symbol assembly
// order are part of the compatibility contract.
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:',.<>?/~";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character classes may appear in the output.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharClasses {
    /// Lowercase letters (a-z).
    pub lower: bool,
    /// Uppercase letters (A-Z).
    pub upper: bool,
    /// Digits (0-9).
    pub digit: bool,
    /// Symbols (!@#$%^&*...).
    pub symbol: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            lower: true,
            upper: true,
            digit: true,
            symbol: true,
        }
    }
}

impl CharClasses {
    /// The enabled character sets, in fixed contract order.
    fn enabled(self) -> Vec<&'static [u8]> {
        let mut sets: Vec<&'static [u8]> = Vec::new();
        if self.lower {
            sets.push(LOWERCASE);
        }
        if self.upper {
            sets.push(UPPERCASE);
        }
        if self.digit {
            sets.push(DIGITS);
        }
        if self.symbol {
            sets.push(SYMBOLS);
        }
        sets
    }

    /// Number of enabled classes.
    #[must_use]
    pub fn count(self) -> usize {
        self.enabled().len()
    }
}

/// Options governing the shape of a derived password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DerivationOptions {
    /// Output length in characters.
    pub length: usize,
    /// Enabled character classes.
    pub classes: CharClasses,
    /// Minimum number of characters from each enabled class.
    pub min_per_class: usize,
}

impl Default for DerivationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClasses::default(),
            min_per_class: 1,
        }
    }
}

impl DerivationOptions {
    /// Check the options against the policy bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::InvalidInput`] if:
    /// - `length` is outside [`MIN_LENGTH`]..=[`MAX_LENGTH`]
    /// - No character class is enabled
    /// - `length` is less than `min_per_class` times the number of enabled
    ///   classes (the minimums could never be satisfied)
    pub fn validate(&self) -> Result<(), DeriveError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(DeriveError::InvalidInput(format!(
                "length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {}",
                self.length
            )));
        }

        let class_count = self.classes.count();
        if class_count == 0 {
            return Err(DeriveError::InvalidInput(
                "at least one character class must be enabled".to_owned(),
            ));
        }

        let mandatory = self
            .min_per_class
            .checked_mul(class_count)
            .ok_or_else(|| DeriveError::InvalidInput("min_per_class too large".to_owned()))?;
        if mandatory > self.length {
            return Err(DeriveError::InvalidInput(format!(
                "length ({}) cannot satisfy {} characters from each of {class_count} classes",
                self.length, self.min_per_class
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode the key-material stream as a password satisfying `options`.
///
/// The caller must have validated `options`. Deterministic: the same
/// stream state and options always produce the same password.
///
/// # Panics
///
/// Panics if the composed bytes are not valid UTF-8 — impossible, all
/// character sets are ASCII.
// Shuffle indices are bounded by chars.len(); the fill loop is bounded by
// options.length.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn encode(
    stream: &mut KeyStream,
    options: &DerivationOptions,
) -> Result<String, DeriveError> {
    let sets = options.classes.enabled();
    let mut pool: Vec<u8> = Vec::new();
    for set in &sets {
        pool.extend_from_slice(set);
    }

    // Mandatory characters first: min_per_class from each enabled class,
    // in contract order.
    let mut chars: Vec<u8> = Vec::with_capacity(options.length);
    for set in &sets {
        for _ in 0..options.min_per_class {
            chars.push(set[stream.next_index(set.len())?]);
        }
    }

    // Fill the remaining positions from the pooled alphabet.
    while chars.len() < options.length {
        chars.push(pool[stream.next_index(pool.len())?]);
    }

    // Stream-driven Fisher–Yates shuffle to remove positional bias from
    // the mandatory-first layout.
    for i in (1..chars.len()).rev() {
        let j = stream.next_index(i + 1)?;
        chars.swap(i, j);
    }

    Ok(String::from_utf8(chars).expect("charset bytes are ASCII"))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
