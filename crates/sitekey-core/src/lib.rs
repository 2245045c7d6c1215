//! `sitekey-core` — Deterministic, stateless password derivation.
//!
//! One master secret plus one public site identifier reproduces one
//! password. Nothing is stored; the user regenerates the password on
//! demand, on any machine, at any time. This crate is the audit target:
//! zero network, zero async, zero UI dependencies.
//!
//! # Compatibility contract
//!
//! Every stage of the pipeline is fixed and documented, because regenerated
//! passwords must match across implementations and years:
//! - Inputs are Unicode **NFC**-normalized, then combined with
//!   length-prefixed fields under a versioned tag ([`normalize`])
//! - Key stretching is **Argon2id v1.3**, `m=65536 KiB, t=3, p=1`, 32-byte
//!   output, fixed application salt ([`kdf`])
//! - Key material expands via **keyed BLAKE3** over a block counter, with
//!   per-mode contexts ([`stream`])
//! - Output encoding draws every index by rejection sampling, bias-free
//!   for any alphabet size ([`password`], [`passphrase`])
//!
//! # Example
//!
//! ```no_run
//! use sitekey_core::{derive, DerivationOptions};
//!
//! let password = derive("correct-horse", "example.com", &DerivationOptions::default())?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), sitekey_core::DeriveError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod normalize;

pub mod kdf;
pub mod stream;

pub mod password;

pub mod passphrase;

pub mod engine;

pub use engine::{derive, derive_passphrase, Engine};
pub use error::DeriveError;
pub use kdf::{Argon2idParams, DEFAULT_M_COST, DEFAULT_P_COST, DEFAULT_T_COST};
pub use memory::{disable_core_dumps, LockedRegion, SecretBuffer};
pub use passphrase::{
    PassphraseOptions, PassphraseStyle, DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT,
};
pub use password::{
    CharClasses, DerivationOptions, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
pub use stream::KeyStream;
