//! High-level credential operations used by enrollment and the CLI.
//!
//! `CredentialStore` turns a cleartext secret into encrypted,
//! permission-restricted storage and reverses that transformation.
//! Each provider gets two related but independently readable files in
//! the store directory:
//!
//! - `<provider>.key`        encrypted credential bytes
//! - `<provider>.meta.json`  non-secret metadata
//!
//! Multi-file operations hold the store's advisory lock for their full
//! duration, so a concurrent save and delete cannot interleave and
//! strand one file without the other.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use zeroize::Zeroize;

use crate::crypto::{decrypt, encrypt};
use crate::errors::{Result, StoreError};

use super::files;
use super::keyvault::KeyVault;
use super::lock::StoreLock;
use super::metadata::{CredentialMetadata, PermissionWarning};

/// Suffix of ciphertext files.
const CIPHER_SUFFIX: &str = ".key";

/// Suffix of metadata files.
const META_SUFFIX: &str = ".meta.json";

/// The main store handle.  Construct one per store directory; every
/// operation resolves paths relative to that directory.
pub struct CredentialStore {
    dir: PathBuf,
    vault: KeyVault,
}

impl CredentialStore {
    /// Open (or lazily create) a store rooted at `dir`.
    ///
    /// Nothing is touched on disk until the first operation that needs
    /// to write.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let vault = KeyVault::new(dir.clone());
        Self { dir, vault }
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ------------------------------------------------------------------
    // Core operations
    // ------------------------------------------------------------------

    /// Encrypt `secret` and persist it under `provider`, overwriting
    /// any previous credential for the same provider.
    ///
    /// Returns only after both the ciphertext and the metadata file are
    /// written.  If the metadata write fails after the ciphertext write
    /// succeeded, the store is inconsistent and `PartialWrite` is
    /// returned rather than a silent success.  Permission-restriction
    /// failures never block the save; they come back as warnings.
    pub fn save(&self, provider: &str, secret: &str) -> Result<Vec<PermissionWarning>> {
        Self::validate_provider(provider)?;
        if secret.is_empty() {
            return Err(StoreError::Validation(
                "credential value cannot be empty".into(),
            ));
        }

        // Serialize the metadata up front so a serialization problem
        // cannot strike between the two file writes.
        let meta = CredentialMetadata {
            provider: provider.to_string(),
            created_at: Utc::now(),
            encrypted: true,
            key_length: secret.len(),
        };
        let meta_bytes = serde_json::to_vec_pretty(&meta)
            .map_err(|e| StoreError::Serialization(format!("metadata: {e}")))?;

        let _lock = StoreLock::acquire(&self.dir)?;
        let mut warnings = Vec::new();

        let master = self.vault.load_or_generate(&mut warnings)?;
        let ciphertext = encrypt(master.as_bytes(), secret.as_bytes())?;

        files::write_restricted(&self.cipher_path(provider), &ciphertext, &mut warnings)?;

        if let Err(e) =
            files::write_restricted(&self.meta_path(provider), &meta_bytes, &mut warnings)
        {
            // The ciphertext is already on disk without its metadata.
            return Err(StoreError::PartialWrite {
                provider: provider.to_string(),
                detail: e.to_string(),
            });
        }

        Ok(warnings)
    }

    /// Decrypt and return the credential stored under `provider`.
    ///
    /// Fails closed: any authentication failure returns
    /// `DecryptionFailed` and never partial or garbage cleartext.  The
    /// recovered cleartext is never logged.
    pub fn get(&self, provider: &str) -> Result<String> {
        Self::validate_provider(provider)?;

        let path = self.cipher_path(provider);
        if !path.exists() {
            return Err(StoreError::NotFound(provider.to_string()));
        }

        let ciphertext = fs::read(&path)?;
        let (master, _warnings) = self.vault.get_or_create_master_key()?;
        let plaintext = decrypt(master.as_bytes(), &ciphertext)?;

        // The plaintext was authenticated, so non-UTF-8 content means
        // the stored bytes were never a string this store wrote.  Wipe
        // and fail closed rather than return a lossy conversion.
        String::from_utf8(plaintext).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            StoreError::DecryptionFailed
        })
    }

    /// Returns `true` if a ciphertext file exists for `provider`.
    ///
    /// Existence only: the credential may still be undecryptable under
    /// the current master key.  Callers needing a liveness guarantee
    /// must call [`get`](Self::get) and handle its error.
    pub fn has(&self, provider: &str) -> bool {
        Self::validate_provider(provider).is_ok() && self.cipher_path(provider).exists()
    }

    /// Remove the ciphertext and metadata files for `provider`.
    ///
    /// Idempotent: succeeds when the files are already absent.  When
    /// exactly one of the two removals fails, `PartialDelete` reports
    /// which file is left behind.
    pub fn delete(&self, provider: &str) -> Result<()> {
        Self::validate_provider(provider)?;

        let _lock = StoreLock::acquire(&self.dir)?;
        let cipher_result = files::remove_if_exists(&self.cipher_path(provider));
        let meta_result = files::remove_if_exists(&self.meta_path(provider));

        match (cipher_result, meta_result) {
            (Ok(_), Ok(_)) => Ok(()),
            // Both removals failed: nothing changed, plain IO error.
            (Err(e), Err(_)) => Err(e.into()),
            (Ok(removed), Err(e)) => {
                if removed {
                    Err(StoreError::PartialDelete {
                        provider: provider.to_string(),
                        detail: format!("metadata file could not be removed: {e}"),
                    })
                } else {
                    Err(e.into())
                }
            }
            (Err(e), Ok(removed)) => {
                if removed {
                    Err(StoreError::PartialDelete {
                        provider: provider.to_string(),
                        detail: format!("ciphertext file could not be removed: {e}"),
                    })
                } else {
                    Err(e.into())
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    /// Read the metadata file for `provider`.
    pub fn metadata(&self, provider: &str) -> Result<CredentialMetadata> {
        Self::validate_provider(provider)?;

        let path = self.meta_path(provider);
        if !path.exists() {
            return Err(StoreError::NotFound(provider.to_string()));
        }

        let bytes = fs::read(&path)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Serialization(format!("{}: {e}", path.display())))
    }

    /// List metadata for all stored credentials, sorted by provider.
    ///
    /// Metadata only: nothing is decrypted.
    pub fn list(&self) -> Result<Vec<CredentialMetadata>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut list = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(provider) = name.strip_suffix(META_SUFFIX) else {
                continue;
            };
            // Stray files that do not map to a valid provider are not
            // part of the store.
            if Self::validate_provider(provider).is_err() {
                continue;
            }
            list.push(self.metadata(provider)?);
        }

        list.sort_by(|a, b| a.provider.cmp(&b.provider));
        Ok(list)
    }

    // ------------------------------------------------------------------
    // Paths
    // ------------------------------------------------------------------

    fn cipher_path(&self, provider: &str) -> PathBuf {
        self.dir.join(format!("{provider}{CIPHER_SUFFIX}"))
    }

    fn meta_path(&self, provider: &str) -> PathBuf {
        self.dir.join(format!("{provider}{META_SUFFIX}"))
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Validate that a provider identifier is safe to use in file names.
    ///
    /// Allowed: ASCII letters, digits, underscores, hyphens, periods.
    /// Must be non-empty, at most 64 characters, and must not start
    /// with a period (dotfiles are reserved for the store itself).
    fn validate_provider(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(StoreError::Validation(
                "provider name cannot be empty".into(),
            ));
        }
        if name.len() > 64 {
            return Err(StoreError::Validation(
                "provider name cannot exceed 64 characters".into(),
            ));
        }
        if name.starts_with('.') {
            return Err(StoreError::Validation(format!(
                "provider name '{name}' cannot start with a period"
            )));
        }
        if !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
        {
            return Err(StoreError::Validation(format!(
                "provider name '{name}' contains invalid characters: only ASCII letters, \
                 digits, underscores, hyphens, and periods are allowed"
            )));
        }
        Ok(())
    }
}
