//! Argon2id key stretching with fixed, documented parameters.
//!
//! The parameters below are part of the compatibility contract: a user must
//! be able to regenerate the same password years later on a different
//! machine, so there is no hardware calibration and no per-install tuning.
//! Changing any value here — or the application salt — changes every
//! password this crate derives.
//!
//! Cost is sized for interactive use: sub-second on commodity hardware,
//! expensive enough to resist offline guessing of the master secret.

use crate::error::DeriveError;
use crate::memory::SecretBuffer;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Output length of the KDF in bytes (256 bits).
const OUTPUT_LEN: usize = 32;

/// Default memory cost in KiB (64 MB).
pub const DEFAULT_M_COST: u32 = 65_536;

/// Default number of iterations.
pub const DEFAULT_T_COST: u32 = 3;

/// Default degree of parallelism.
pub const DEFAULT_P_COST: u32 = 1;

/// Application salt, fixed for every derivation.
///
/// Per-site diversification flows through the combined input (see
/// [`crate::normalize`]), not the salt. The fixed salt separates this
/// application's derivations from any other use of Argon2id with the same
/// master secret.
const APP_SALT: &[u8; 32] = &[
    0x73, 0x69, 0x74, 0x65, 0x6b, 0x65, 0x79, 0x2d, 0x76, 0x31, 0x8e, 0xbf, 0x78, 0x79, 0xc9,
    0xe9, 0xac, 0xe7, 0x91, 0xb6, 0xb4, 0xc9, 0x2b, 0x9b, 0x50, 0xe7, 0x60, 0xe5, 0x76, 0x01,
    0x73, 0x59,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Argon2id parameter set.
///
/// Fields use the `argon2` crate convention:
/// - `m_cost`: memory in KiB (NOT bytes, NOT MB)
/// - `t_cost`: number of iterations
/// - `p_cost`: degree of parallelism
///
/// The defaults are the contract; overriding them (via
/// [`crate::Engine::with_params`]) forks the password universe and must be
/// kept fixed forever by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argon2idParams {
    /// Memory cost in kibibytes (1 KiB = 1024 bytes). 64 MB = `65_536`.
    pub m_cost: u32,
    /// Number of iterations (time cost).
    pub t_cost: u32,
    /// Degree of parallelism (number of lanes).
    pub p_cost: u32,
}

impl Default for Argon2idParams {
    fn default() -> Self {
        Self {
            m_cost: DEFAULT_M_COST,
            t_cost: DEFAULT_T_COST,
            p_cost: DEFAULT_P_COST,
        }
    }
}

// ---------------------------------------------------------------------------
// Core KDF
// ---------------------------------------------------------------------------

/// Stretch the combined input into 32 bytes of uniform key material.
///
/// Deterministic: no randomness, no clock, no system entropy. The
/// intermediate output array is zeroized after copying into the returned
/// [`SecretBuffer`].
///
/// # Errors
///
/// Returns [`DeriveError::Derivation`] if the argon2 parameters are invalid
/// or the derivation itself fails (e.g., memory allocation). Neither can
/// happen for the default parameters and any input accepted by
/// [`crate::normalize::combine`].
pub fn stretch(
    combined: &SecretBuffer,
    params: &Argon2idParams,
) -> Result<SecretBuffer, DeriveError> {
    let argon2_params = argon2::Params::new(
        params.m_cost,
        params.t_cost,
        params.p_cost,
        Some(OUTPUT_LEN),
    )
    .map_err(|e| DeriveError::Derivation(format!("invalid argon2 params: {e}")))?;

    let argon2 = argon2::Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );

    let mut output = [0u8; OUTPUT_LEN];
    argon2
        .hash_password_into(combined.expose(), APP_SALT, &mut output)
        .map_err(|e| DeriveError::Derivation(format!("argon2id derivation failed: {e}")))?;

    let key = SecretBuffer::new(&output);
    output.zeroize();
    Ok(key)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
