//! The derivation engine.
//!
//! An [`Engine`] is an immutable, explicitly-passed handle carrying the
//! Argon2id parameters and the empty-site opt-in. It holds no per-call
//! state: every derivation runs the linear pipeline
//! normalize → stretch → encode in private working memory and discards it
//! on return, so concurrent calls through one engine (or clones of it)
//! share nothing mutable.

use crate::error::DeriveError;
use crate::kdf::{self, Argon2idParams};
use crate::normalize;
use crate::passphrase::{self, PassphraseOptions};
use crate::password::{self, DerivationOptions};
use crate::stream::KeyStream;

/// Immutable derivation handle.
///
/// Construct once, pass by reference; cloning is cheap. Two engines with
/// equal parameters are interchangeable — there is no hidden state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    params: Argon2idParams,
    allow_empty_site: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with the contract parameters ([`Argon2idParams::default`])
    /// and empty site identifiers disallowed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: Argon2idParams::default(),
            allow_empty_site: false,
        }
    }

    /// Replace the Argon2id parameters.
    ///
    /// Different parameters derive entirely different passwords. Callers
    /// overriding the defaults must keep their values fixed forever, or
    /// previously derived passwords become unreachable.
    #[must_use]
    pub fn with_params(mut self, params: Argon2idParams) -> Self {
        self.params = params;
        self
    }

    /// Opt in (or back out) of deriving with an empty site identifier.
    #[must_use]
    pub fn with_allow_empty_site(mut self, allow: bool) -> Self {
        self.allow_empty_site = allow;
        self
    }

    /// The Argon2id parameters this engine derives with.
    #[must_use]
    pub const fn params(&self) -> &Argon2idParams {
        &self.params
    }

    /// Derive a character password for `site_identifier` from
    /// `master_secret`.
    ///
    /// Deterministic: identical inputs and options always produce the
    /// identical password, across calls, processes, and platforms.
    ///
    /// # Errors
    ///
    /// - [`DeriveError::InvalidInput`] — empty master secret, disallowed
    ///   empty site identifier, or out-of-bounds options
    /// - [`DeriveError::Derivation`] — internal primitive failure; cannot
    ///   happen for validated inputs with sane parameters
    pub fn derive(
        &self,
        master_secret: &str,
        site_identifier: &str,
        options: &DerivationOptions,
    ) -> Result<String, DeriveError> {
        options.validate()?;
        let combined = normalize::combine(master_secret, site_identifier, self.allow_empty_site)?;
        let key = kdf::stretch(&combined, &self.params)?;
        let mut stream = KeyStream::new(&key, password::STREAM_CONTEXT)?;
        password::encode(&mut stream, options)
    }

    /// Derive a word-based passphrase for `site_identifier` from
    /// `master_secret`.
    ///
    /// Same pipeline and determinism contract as [`Self::derive`]; only
    /// the encoding stage differs, under its own stream context, so a
    /// passphrase never leaks bytes of the character password for the same
    /// inputs.
    ///
    /// # Errors
    ///
    /// As for [`Self::derive`].
    pub fn derive_passphrase(
        &self,
        master_secret: &str,
        site_identifier: &str,
        options: &PassphraseOptions,
    ) -> Result<String, DeriveError> {
        options.validate()?;
        let combined = normalize::combine(master_secret, site_identifier, self.allow_empty_site)?;
        let key = kdf::stretch(&combined, &self.params)?;
        let mut stream = KeyStream::new(&key, passphrase::STREAM_CONTEXT)?;
        passphrase::encode(&mut stream, options)
    }
}

/// Derive a character password with the contract parameters.
///
/// Convenience wrapper over [`Engine::new`] for callers that never
/// customize the engine.
///
/// # Errors
///
/// As for [`Engine::derive`].
pub fn derive(
    master_secret: &str,
    site_identifier: &str,
    options: &DerivationOptions,
) -> Result<String, DeriveError> {
    Engine::new().derive(master_secret, site_identifier, options)
}

/// Derive a passphrase with the contract parameters.
///
/// # Errors
///
/// As for [`Engine::derive_passphrase`].
pub fn derive_passphrase(
    master_secret: &str,
    site_identifier: &str,
    options: &PassphraseOptions,
) -> Result<String, DeriveError> {
    Engine::new().derive_passphrase(master_secret, site_identifier, options)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::CharClasses;

    /// Small params for fast tests — 32 KiB, 1 iteration, 1 lane.
    const TEST_PARAMS: Argon2idParams = Argon2idParams {
        m_cost: 32,
        t_cost: 1,
        p_cost: 1,
    };

    fn test_engine() -> Engine {
        Engine::new().with_params(TEST_PARAMS)
    }

    #[test]
    fn derive_is_deterministic() {
        let engine = test_engine();
        let options = DerivationOptions::default();
        let a = engine
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        let b = engine
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn separate_engines_agree() {
        let options = DerivationOptions::default();
        let a = test_engine()
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        let b = test_engine()
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        assert_eq!(a, b, "engines with equal params must be interchangeable");
    }

    #[test]
    fn different_sites_differ() {
        let engine = test_engine();
        let options = DerivationOptions::default();
        let com = engine
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        let org = engine
            .derive("correct-horse", "example.org", &options)
            .expect("derive should succeed");
        assert_ne!(com, org);
    }

    #[test]
    fn different_secrets_differ() {
        let engine = test_engine();
        let options = DerivationOptions::default();
        let a = engine
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        let b = engine
            .derive("correct-horsf", "example.com", &options)
            .expect("derive should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn concatenation_boundary_does_not_collide() {
        let engine = test_engine();
        let options = DerivationOptions::default();
        let a = engine.derive("ab", "c", &options).expect("derive should succeed");
        let b = engine.derive("a", "bc", &options).expect("derive should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_secret_rejected() {
        let err = test_engine()
            .derive("", "example.com", &DerivationOptions::default())
            .expect_err("empty secret must be rejected");
        assert!(matches!(err, DeriveError::InvalidInput(_)));
    }

    #[test]
    fn empty_site_requires_opt_in() {
        let options = DerivationOptions::default();
        let err = test_engine()
            .derive("secret", "", &options)
            .expect_err("empty site must be rejected by default");
        assert!(matches!(err, DeriveError::InvalidInput(_)));

        let engine = test_engine().with_allow_empty_site(true);
        engine
            .derive("secret", "", &options)
            .expect("opted-in empty site should derive");
    }

    #[test]
    fn invalid_options_rejected_before_stretching() {
        let options = DerivationOptions {
            length: 2,
            ..DerivationOptions::default()
        };
        let err = test_engine()
            .derive("secret", "example.com", &options)
            .expect_err("invalid options must be rejected");
        assert!(matches!(err, DeriveError::InvalidInput(_)));
    }

    #[test]
    fn output_matches_policy() {
        let options = DerivationOptions::default();
        let pw = test_engine()
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        assert_eq!(pw.len(), 16);
        assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pw.chars().any(|c| c.is_ascii_digit()));
        assert!(pw.chars().any(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn restricted_classes_respected() {
        let options = DerivationOptions {
            length: 12,
            classes: CharClasses {
                lower: true,
                upper: false,
                digit: true,
                symbol: false,
            },
            min_per_class: 1,
        };
        let pw = test_engine()
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        assert!(pw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn nfc_equivalent_secrets_agree() {
        let engine = test_engine();
        let options = DerivationOptions::default();
        let composed = engine
            .derive("caf\u{e9}", "example.com", &options)
            .expect("derive should succeed");
        let decomposed = engine
            .derive("cafe\u{301}", "example.com", &options)
            .expect("derive should succeed");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn passphrase_is_deterministic() {
        let engine = test_engine();
        let options = PassphraseOptions::default();
        let a = engine
            .derive_passphrase("correct-horse", "example.com", &options)
            .expect("derive_passphrase should succeed");
        let b = engine
            .derive_passphrase("correct-horse", "example.com", &options)
            .expect("derive_passphrase should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn passphrase_differs_from_password() {
        let engine = test_engine();
        let pw = engine
            .derive("correct-horse", "example.com", &DerivationOptions::default())
            .expect("derive should succeed");
        let pp = engine
            .derive_passphrase("correct-horse", "example.com", &PassphraseOptions::default())
            .expect("derive_passphrase should succeed");
        assert_ne!(pw, pp);
    }

    #[test]
    fn passphrase_rejects_invalid_word_count() {
        let options = PassphraseOptions {
            word_count: 1,
            ..PassphraseOptions::default()
        };
        let err = test_engine()
            .derive_passphrase("secret", "example.com", &options)
            .expect_err("word count below minimum must be rejected");
        assert!(matches!(err, DeriveError::InvalidInput(_)));
    }

    #[test]
    fn params_change_forks_outputs() {
        let options = DerivationOptions::default();
        let a = test_engine()
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        let slower = Engine::new().with_params(Argon2idParams {
            m_cost: 32,
            t_cost: 2,
            p_cost: 1,
        });
        let b = slower
            .derive("correct-horse", "example.com", &options)
            .expect("derive should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn new_engine_uses_contract_params() {
        // Contract-cost derivation itself is exercised in the integration
        // suite; this only checks the default wiring.
        assert_eq!(Engine::new().params(), &Argon2idParams::default());
    }
}
