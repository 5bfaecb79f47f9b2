//! Advisory cross-process locking for the store directory.
//!
//! The master key file and each provider's ciphertext/metadata pair are
//! shared between processes.  Without a lock, concurrent first use can
//! mint two different master keys (orphaning ciphertext), and a delete
//! interleaved with a save can leave a metadata file without a matching
//! ciphertext file.  Every multi-file operation and every
//! load-or-generate of the master key therefore holds this lock.
//!
//! The lock is an OS-level exclusive lock on `<dir>/.keystash.lock`,
//! released when the guard is dropped.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use fs2::FileExt;

use crate::errors::{Result, StoreError};

/// File name of the lock inside the store directory.
const LOCK_FILE: &str = ".keystash.lock";

/// Guard holding an exclusive advisory lock on a store directory.
///
/// Blocks until the lock is available.  Unlocks on drop.
pub struct StoreLock {
    file: File,
}

impl StoreLock {
    /// Acquire the lock for `dir`, creating the directory and the lock
    /// file if needed.
    pub fn acquire(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(dir.join(LOCK_FILE))?;

        file.lock_exclusive()
            .map_err(|e| StoreError::Lock(format!("{}: {e}", dir.display())))?;

        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // Dropping the file would release the lock anyway; unlock
        // explicitly so errors are not hidden behind the close.
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
