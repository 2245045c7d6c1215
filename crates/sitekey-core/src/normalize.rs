//! Input normalization and injective combination.
//!
//! Both inputs are normalized to Unicode NFC before any byte of them is
//! used, so composed and decomposed renderings of the same text derive the
//! same password. The normalization form is part of the compatibility
//! contract — changing it would change derived passwords for any input
//! containing combining characters.
//!
//! The master secret and site identifier are combined into a single byte
//! sequence with length-prefixed fields under a fixed tag. The encoding is
//! injective: no two distinct (secret, identifier) pairs produce the same
//! combined sequence, so `("ab", "c")` can never collide with `("a", "bc")`.

use crate::error::DeriveError;
use crate::memory::SecretBuffer;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

/// Domain-separation tag prefixed to every combined input.
///
/// Versioned so a future format revision cannot collide with this one.
const COMBINE_TAG: &[u8] = b"sitekey-core/v1";

/// Validate both inputs, normalize them to NFC, and combine them into a
/// single injectively-encoded byte sequence.
///
/// The intermediate normalized secret and the staging vector are zeroized
/// before returning; the result lives in a [`SecretBuffer`].
///
/// # Errors
///
/// Returns [`DeriveError::InvalidInput`] if:
/// - `master_secret` is empty
/// - `site_identifier` is empty and `allow_empty_site` is `false`
pub fn combine(
    master_secret: &str,
    site_identifier: &str,
    allow_empty_site: bool,
) -> Result<SecretBuffer, DeriveError> {
    if master_secret.is_empty() {
        return Err(DeriveError::InvalidInput(
            "master secret must not be empty".to_owned(),
        ));
    }
    if site_identifier.is_empty() && !allow_empty_site {
        return Err(DeriveError::InvalidInput(
            "site identifier must not be empty (use allow_empty_site to opt in)".to_owned(),
        ));
    }

    let mut secret_nfc: String = master_secret.nfc().collect();
    let site_nfc: String = site_identifier.nfc().collect();

    // tag || len(secret) || secret || len(site) || site, lengths as u64 LE.
    let mut combined: Vec<u8> = Vec::new();
    combined.extend_from_slice(COMBINE_TAG);
    combined.extend_from_slice(&(secret_nfc.len() as u64).to_le_bytes());
    combined.extend_from_slice(secret_nfc.as_bytes());
    combined.extend_from_slice(&(site_nfc.len() as u64).to_le_bytes());
    combined.extend_from_slice(site_nfc.as_bytes());

    let buf = SecretBuffer::new(&combined);
    combined.zeroize();
    secret_nfc.zeroize();
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
