//! Deterministic key-material stream.
//!
//! Expands the 32-byte stretched key into an unbounded byte stream. Block
//! `i` is the keyed BLAKE3 hash of the 8-byte little-endian block counter;
//! the key itself is derived from the stretched key material with a
//! per-mode context string, so the character and passphrase encoders can
//! never consume overlapping streams. Consumed bytes are never reused —
//! when the current block runs out the counter advances and a fresh block
//! is produced. No randomness, no clock, no iteration over unordered
//! structures.

use crate::error::DeriveError;
use crate::memory::SecretBuffer;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the expanded key and of each stream block.
const BLOCK_LEN: usize = 32;

/// Upper bound on blocks consumed per derivation.
///
/// Rejection sampling discards less than half of all samples on average,
/// and the longest permitted output needs well under a hundred blocks, so
/// reaching this bound indicates a defect rather than bad luck.
const MAX_BLOCKS: u64 = 4096;

/// A deterministic byte stream keyed by derived key material.
///
/// The key and the current block are zeroized when the stream is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyStream {
    key: [u8; BLOCK_LEN],
    block: [u8; BLOCK_LEN],
    pos: usize,
    counter: u64,
}

impl KeyStream {
    /// Create a stream over the given key material, domain-separated by
    /// `context` (a fixed, application-chosen string).
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::Derivation`] if the key material is not
    /// exactly 32 bytes — impossible for output of [`crate::kdf::stretch`].
    pub fn new(key_material: &SecretBuffer, context: &str) -> Result<Self, DeriveError> {
        if key_material.len() != BLOCK_LEN {
            return Err(DeriveError::Derivation(format!(
                "key material must be {BLOCK_LEN} bytes, got {}",
                key_material.len()
            )));
        }
        let key = blake3::derive_key(context, key_material.expose());
        Ok(Self {
            key,
            block: [0u8; BLOCK_LEN],
            // Position past the end forces a refill on first read.
            pos: BLOCK_LEN,
            counter: 0,
        })
    }

    /// Derive the next block from the counter and reset the read position.
    fn refill(&mut self) -> Result<(), DeriveError> {
        if self.counter >= MAX_BLOCKS {
            return Err(DeriveError::Derivation(
                "key-material stream exhausted beyond retry bound".to_owned(),
            ));
        }
        self.block = *blake3::keyed_hash(&self.key, &self.counter.to_le_bytes()).as_bytes();
        self.counter = self.counter.saturating_add(1);
        self.pos = 0;
        Ok(())
    }

    /// Next byte of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::Derivation`] past the block retry bound.
    pub fn next_byte(&mut self) -> Result<u8, DeriveError> {
        if self.pos >= BLOCK_LEN {
            self.refill()?;
        }
        let byte = self.block[self.pos];
        self.pos = self.pos.saturating_add(1);
        Ok(byte)
    }

    /// Next 32-bit little-endian chunk of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::Derivation`] past the block retry bound.
    pub fn next_u32(&mut self) -> Result<u32, DeriveError> {
        let mut bytes = [0u8; 4];
        for byte in &mut bytes {
            *byte = self.next_byte()?;
        }
        Ok(u32::from_le_bytes(bytes))
    }

    /// Uniform index in `0..bound` via rejection sampling — no modulo bias.
    ///
    /// Samples 32-bit chunks and rejects values outside the largest
    /// multiple of `bound` representable in 32 bits, so every index is
    /// exactly equally likely regardless of `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::Derivation`] if `bound` is zero, exceeds
    /// `u32::MAX`, or the stream's retry bound is exhausted.
    // Division and modulo below cannot panic: bound32 is checked non-zero.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn next_index(&mut self, bound: usize) -> Result<usize, DeriveError> {
        let bound32 = u32::try_from(bound)
            .map_err(|_| DeriveError::Derivation(format!("sampling bound {bound} too large")))?;
        if bound32 == 0 {
            return Err(DeriveError::Derivation(
                "sampling bound must be non-zero".to_owned(),
            ));
        }
        let zone = (u32::MAX / bound32) * bound32;
        loop {
            let sample = self.next_u32()?;
            if sample < zone {
                return Ok((sample % bound32) as usize);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
