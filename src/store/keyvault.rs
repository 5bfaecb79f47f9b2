//! Master-key lifecycle for a store directory.
//!
//! The vault owns exactly one key file per directory.  The key is
//! created lazily on first use, never rotated, and never shown to a
//! user or written to any log.  Losing or overwriting the key file
//! permanently orphans every ciphertext encrypted under it; the store
//! offers no recovery path for that, and does not pretend to.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::MasterKey;
use crate::errors::Result;

use super::files;
use super::lock::StoreLock;
use super::metadata::PermissionWarning;

/// File name of the master key inside the store directory.
const MASTER_KEY_FILE: &str = ".master_key";

/// Owns the master-key lifecycle for one store directory.
///
/// A plain value object: construct one per directory, no global state.
pub struct KeyVault {
    dir: PathBuf,
}

impl KeyVault {
    /// Create a vault rooted at `dir`.  Nothing is touched on disk
    /// until the key is first requested.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the master key file.
    pub fn key_path(&self) -> PathBuf {
        self.dir.join(MASTER_KEY_FILE)
    }

    /// Load the master key, generating and persisting a fresh one if
    /// none exists yet.
    ///
    /// Generation happens under the store's exclusive advisory lock,
    /// so two processes racing on first use cannot mint two different
    /// keys.  A failure to restrict the key file's permissions is
    /// returned as a warning, not an error.
    pub fn get_or_create_master_key(&self) -> Result<(MasterKey, Vec<PermissionWarning>)> {
        let _lock = StoreLock::acquire(&self.dir)?;
        let mut warnings = Vec::new();
        let key = self.load_or_generate(&mut warnings)?;
        Ok((key, warnings))
    }

    /// Lock-free variant for callers that already hold the store lock.
    pub(crate) fn load_or_generate(
        &self,
        warnings: &mut Vec<PermissionWarning>,
    ) -> Result<MasterKey> {
        let path = self.key_path();

        if path.exists() {
            // Raw bytes, no interpretation: a corrupt or truncated key
            // file surfaces as a decryption failure downstream.
            return Ok(MasterKey::from_bytes(fs::read(&path)?));
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let key = MasterKey::generate();
        files::write_restricted(&path, key.as_bytes(), warnings)?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KEY_LEN;
    use tempfile::TempDir;

    #[test]
    fn first_use_creates_key_file() {
        let dir = TempDir::new().unwrap();
        let vault = KeyVault::new(dir.path());

        assert!(!vault.key_path().exists());
        let (key, _warnings) = vault.get_or_create_master_key().unwrap();
        assert!(vault.key_path().exists());
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn key_is_stable_across_calls() {
        let dir = TempDir::new().unwrap();
        let vault = KeyVault::new(dir.path());

        let (first, _) = vault.get_or_create_master_key().unwrap();
        let (second, _) = vault.get_or_create_master_key().unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn separate_directories_get_separate_keys() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();

        let (key_a, _) = KeyVault::new(a.path()).get_or_create_master_key().unwrap();
        let (key_b, _) = KeyVault::new(b.path()).get_or_create_master_key().unwrap();
        assert_ne!(key_a.as_bytes(), key_b.as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let vault = KeyVault::new(dir.path());
        let (_, warnings) = vault.get_or_create_master_key().unwrap();

        assert!(warnings.is_empty());
        let mode = fs::metadata(vault.key_path())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn existing_key_file_is_returned_verbatim() {
        let dir = TempDir::new().unwrap();
        let vault = KeyVault::new(dir.path());

        // Pre-seed a key file of unusual length; the vault must hand it
        // back without validating its contents.
        fs::write(vault.key_path(), [0x11u8; 7]).unwrap();
        let (key, _) = vault.get_or_create_master_key().unwrap();
        assert_eq!(key.as_bytes(), &[0x11u8; 7]);
    }
}
