use thiserror::Error;

/// All errors that can occur in keystash.
#[derive(Debug, Error)]
pub enum StoreError {
    // --- Validation errors ---
    #[error("Validation failed: {0}")]
    Validation(String),

    // --- Store errors ---
    #[error("No credential stored for provider '{0}'")]
    NotFound(String),

    #[error(
        "Decryption failed: the stored credential cannot be recovered under the \
         current master key. Delete it and enroll the credential again."
    )]
    DecryptionFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Credential for '{provider}' was written but its metadata was not: {detail}")]
    PartialWrite { provider: String, detail: String },

    #[error("Delete for '{provider}' removed only one of its files: {detail}")]
    PartialDelete { provider: String, detail: String },

    // --- Lock errors ---
    #[error("Could not acquire the store lock: {0}")]
    Lock(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for keystash results.
pub type Result<T> = std::result::Result<T, StoreError>;
