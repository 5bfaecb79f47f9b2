//! Cryptographic primitives for keystash.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The zeroize-on-drop `MasterKey` wrapper (`master`)

pub mod encryption;
pub mod master;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, MasterKey};
pub use encryption::{decrypt, encrypt};
pub use master::{MasterKey, KEY_LEN};
