//! Credential metadata and non-fatal operation warnings.
//!
//! Metadata lives next to each provider's ciphertext as a separate,
//! independently readable JSON file.  It is deliberately non-secret:
//! it exists so an operator can see what is stored, and when, without
//! decrypting anything.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata stored alongside a provider's ciphertext file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialMetadata {
    /// The provider identifier the credential is stored under.
    pub provider: String,

    /// When the credential was (last) saved.
    pub created_at: DateTime<Utc>,

    /// Always true for credentials written by this store.
    pub encrypted: bool,

    /// Byte length of the cleartext credential.
    ///
    /// Recording the length leaks how long the secret is.  That leak is
    /// accepted on purpose: it lets an operator spot a truncated or
    /// obviously wrong key without decrypting it.  Callers with a
    /// stricter threat model should treat this file as sensitive too.
    pub key_length: usize,
}

/// Non-fatal notice that owner-only permissions could not be applied
/// to a stored file.
///
/// Some platforms and filesystems have no POSIX permission bits.
/// Refusing to store the secret at all would be worse than storing it
/// with best-effort protection, so the operation proceeds and this
/// warning is returned for the caller to surface.
#[derive(Debug, Clone)]
pub struct PermissionWarning {
    path: PathBuf,
    detail: String,
}

impl PermissionWarning {
    pub(crate) fn new(path: &Path, detail: String) -> Self {
        Self {
            path: path.to_path_buf(),
            detail,
        }
    }

    /// The file the restriction failed for.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for PermissionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not restrict permissions on {}: {}",
            self.path.display(),
            self.detail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_serializes_expected_fields() {
        let meta = CredentialMetadata {
            provider: "google".to_string(),
            created_at: Utc::now(),
            encrypted: true,
            key_length: 20,
        };

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"provider\":\"google\""));
        assert!(json.contains("\"encrypted\":true"));
        assert!(json.contains("\"key_length\":20"));
        assert!(json.contains("created_at"));
    }

    #[test]
    fn metadata_roundtrips_through_json() {
        let meta = CredentialMetadata {
            provider: "openai".to_string(),
            created_at: Utc::now(),
            encrypted: true,
            key_length: 51,
        };

        let json = serde_json::to_vec(&meta).unwrap();
        let back: CredentialMetadata = serde_json::from_slice(&json).unwrap();
        assert_eq!(back.provider, "openai");
        assert_eq!(back.key_length, 51);
        assert!(back.encrypted);
    }

    #[test]
    fn warning_display_names_the_file() {
        let warning =
            PermissionWarning::new(Path::new("/tmp/x.key"), "unsupported".to_string());
        let text = warning.to_string();
        assert!(text.contains("/tmp/x.key"));
        assert!(text.contains("unsupported"));
    }
}
