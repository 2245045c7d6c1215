//! Error types for `sitekey-core`.

use thiserror::Error;

/// Errors produced by a derivation call.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// Caller-correctable input problem: empty master secret, disallowed
    /// empty site identifier, or out-of-bounds derivation options.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal derivation failure (Argon2id parameter validation,
    /// key-material stream exhaustion). Never produced for inputs that
    /// passed validation — it indicates a defect, not a user error.
    #[error("derivation failed: {0}")]
    Derivation(String),
}
