//! Low-level file helpers shared by the vault and the credential store.
//!
//! All persisted artifacts (master key, ciphertext, metadata) go through
//! `write_restricted`: an atomic temp-file + rename write with owner-only
//! permissions applied before the rename.  Permission restriction is
//! best-effort; a failure is reported as a `PermissionWarning` value so
//! callers can surface it without aborting the operation.

use std::fs;
use std::io;
use std::path::Path;

use super::metadata::PermissionWarning;

/// Write `bytes` to `path` atomically: write to a temp file in the same
/// directory, then rename.  Rename within one directory is atomic on
/// the same filesystem, so readers never observe a partial file.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;

    // Restrict the temp file before it becomes visible under the real
    // name, so the final file never exists with open permissions.
    let _ = restrict_permissions(&tmp_path);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Atomically write `bytes` to `path` with owner-only permissions.
///
/// On platforms or filesystems without POSIX permission bits the write
/// still succeeds and a warning is pushed for the caller to surface.
pub(crate) fn write_restricted(
    path: &Path,
    bytes: &[u8],
    warnings: &mut Vec<PermissionWarning>,
) -> io::Result<()> {
    write_atomic(path, bytes)?;

    if let Err(detail) = restrict_permissions(path) {
        warnings.push(PermissionWarning::new(path, detail));
    }

    Ok(())
}

/// Restrict `path` to owner-only read/write (0600).
///
/// Returns a human-readable reason when the restriction could not be
/// applied.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::result::Result<(), String> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| e.to_string())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::result::Result<(), String> {
    Err("this platform does not support POSIX permission bits".to_string())
}

/// Remove `path` if it exists.  Returns `Ok(true)` when a file was
/// removed, `Ok(false)` when there was nothing to remove.
pub(crate) fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
