//! Store module: the key vault and the encrypted credential store.
//!
//! This module provides:
//! - `KeyVault`: master-key lifecycle rooted at a directory (`keyvault`)
//! - `CredentialStore`: encrypt/decrypt named credentials (`credentials`)
//! - `CredentialMetadata` and `PermissionWarning` types (`metadata`)
//! - Advisory cross-process locking for multi-file operations (`lock`)

pub mod credentials;
mod files;
pub mod keyvault;
pub mod lock;
pub mod metadata;

// Re-export the most commonly used items.
pub use credentials::CredentialStore;
pub use keyvault::KeyVault;
pub use lock::StoreLock;
pub use metadata::{CredentialMetadata, PermissionWarning};
