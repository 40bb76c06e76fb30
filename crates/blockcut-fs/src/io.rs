//! Text reads and atomic writes with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// The file must be valid UTF-8; anything else surfaces as an
/// [`Error::Io`] with kind `InvalidData`.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.as_native();
    let content = fs::read_to_string(native_path).map_err(|e| Error::io(native_path, e))?;
    debug!(path = %path, bytes = content.len(), "read file");
    Ok(content)
}

/// Write content atomically to a file with locking.
///
/// Symlinks are followed, so the file they point to is replaced and the
/// link itself is left alone. An existing target must be writable by the
/// caller and is held under an exclusive advisory lock until the
/// replacement is in place; a second writer gets `Error::LockFailed`
/// instead of waiting. The content goes to a temp file in the same
/// directory, is fsynced, then renamed over the target, so readers see
/// either the old or the new content. The target's permissions are
/// carried over.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_target(path.as_native())?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let guard = open_existing_for_write(&target)?;
    if let Some(file) = &guard {
        FileExt::try_lock_exclusive(file).map_err(|_| Error::LockFailed {
            path: target.clone(),
        })?;
    }

    let temp_path = temp_path_for(&target);
    let result = write_temp_and_rename(&target, &temp_path, content);
    if result.is_err() {
        // The rename never happened, so the temp file is ours to discard.
        let _ = fs::remove_file(&temp_path);
    }

    if let Some(file) = guard {
        FileExt::unlock(&file).map_err(|_| Error::LockFailed {
            path: target.clone(),
        })?;
    }
    result?;

    debug!(path = %path, target = %target.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// The file a write should replace: symlinks resolved, or the path as
/// given when nothing exists there yet.
fn resolve_target(native_path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(native_path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(native_path.to_path_buf()),
        Err(e) => Err(Error::io(native_path, e)),
    }
}

/// Opens an existing target for writing without truncating it.
///
/// Fails with `PermissionDenied` on a read-only file even though the
/// rename alone would succeed.
fn open_existing_for_write(target: &Path) -> Result<Option<File>> {
    match OpenOptions::new().write(true).open(target) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(target, e)),
    }
}

fn temp_path_for(target: &Path) -> PathBuf {
    let mut temp_name = std::ffi::OsString::from(".");
    if let Some(name) = target.file_name() {
        temp_name.push(name);
    }
    temp_name.push(format!(".{}.tmp", std::process::id()));
    target.with_file_name(temp_name)
}

fn write_temp_and_rename(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let original_permissions = fs::metadata(target).ok().map(|m| m.permissions());

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    drop(temp_file);

    if let Some(permissions) = original_permissions {
        fs::set_permissions(temp_path, permissions).map_err(|e| Error::io(temp_path, e))?;
    }

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))?;

    Ok(())
}
