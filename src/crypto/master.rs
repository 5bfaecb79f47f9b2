//! The master key used to encrypt every credential in a store.
//!
//! A wrapper around raw symmetric key material that automatically
//! zeroes its memory when dropped, so the key cannot linger after it
//! is no longer needed.  The wrapper never interprets the bytes: a
//! key loaded from a corrupt or truncated file is handed to the
//! cipher as-is and surfaces as an encryption or decryption failure
//! there, not here.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a freshly generated master key (256 bits).
pub const KEY_LEN: usize = 32;

/// Raw master key material, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: Vec<u8>,
}

impl MasterKey {
    /// Generate fresh cryptographically secure key material.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Wrap key material read from disk, without validation.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for MasterKey {
    // Key material must never end up in logs or error output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MasterKey({} bytes)", self.bytes.len())
    }
}
