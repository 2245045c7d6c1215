//! Deterministic passphrase encoding.
//!
//! Word-based alternative to the character policy: the same normalization
//! and key-stretching pipeline selects words from the embedded list instead
//! of characters from an alphabet. Useful where a password must be typed or
//! spoken rather than pasted.

pub mod wordlist;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;
use crate::stream::KeyStream;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed word count.
pub const MIN_WORD_COUNT: usize = 2;

/// Maximum allowed word count.
pub const MAX_WORD_COUNT: usize = 10;

/// Default word count (32 bits of wordlist entropy).
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Stream domain-separation context for passphrases.
pub(crate) const STREAM_CONTEXT: &str = "sitekey-core v1 passphrase";

/// Entropy per word in bits: log2 of the wordlist size.
const BITS_PER_WORD: f64 = 8.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How words are joined into a passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassphraseStyle {
    /// `MapleGeckoTundra`
    Pascal,
    /// `mapleGeckoTundra`
    Camel,
    /// Words joined with the given string, e.g. `maple-gecko-tundra` for `-`.
    Separator(String),
}

impl Default for PassphraseStyle {
    fn default() -> Self {
        Self::Pascal
    }
}

impl PassphraseStyle {
    /// Append `word` to `into` according to this style. `first` marks the
    /// first word of the passphrase.
    fn push(&self, word: &str, into: &mut String, first: bool) {
        match self {
            Self::Pascal => push_capitalized(word, into),
            Self::Camel => {
                if first {
                    into.push_str(word);
                } else {
                    push_capitalized(word, into);
                }
            }
            Self::Separator(sep) => {
                if !first {
                    into.push_str(sep);
                }
                into.push_str(word);
            }
        }
    }
}

/// Capitalize the first character of `word` and append it to `into`.
fn push_capitalized(word: &str, into: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        into.extend(first.to_uppercase());
    }
    into.push_str(chars.as_str());
}

/// Options governing the shape of a derived passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassphraseOptions {
    /// Number of words in the passphrase.
    pub word_count: usize,
    /// How words are joined.
    pub style: PassphraseStyle,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            style: PassphraseStyle::default(),
        }
    }
}

impl PassphraseOptions {
    /// Set the word count from a target number of entropy bits.
    ///
    /// Rounds up: `with_entropy_bits(45.0)` requests 6 words (48 bits).
    /// The result still passes through [`Self::validate`], so a target
    /// outside the supported range fails there.
    #[must_use]
    pub fn with_entropy_bits(mut self, bits: f64) -> Self {
        self.word_count = (bits / BITS_PER_WORD).ceil() as usize;
        self
    }

    /// Entropy of a passphrase with these options, in bits.
    #[must_use]
    pub fn entropy_bits(&self) -> f64 {
        BITS_PER_WORD * self.word_count as f64
    }

    /// Check the options against the policy bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::InvalidInput`] if `word_count` is outside
    /// [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`].
    pub fn validate(&self) -> Result<(), DeriveError> {
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(DeriveError::InvalidInput(format!(
                "word count must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {}",
                self.word_count
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode the key-material stream as a passphrase satisfying `options`.
///
/// The caller must have validated `options`.
///
/// # Errors
///
/// Returns [`DeriveError::Derivation`] only on stream exhaustion.
pub(crate) fn encode(
    stream: &mut KeyStream,
    options: &PassphraseOptions,
) -> Result<String, DeriveError> {
    let mut out = String::new();
    for i in 0..options.word_count {
        let word = wordlist::WORDS[stream.next_index(wordlist::WORDLIST_SIZE)?];
        options.style.push(word, &mut out, i == 0);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
