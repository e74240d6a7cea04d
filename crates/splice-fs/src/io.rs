//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::checksum::Fingerprint;
use crate::{Error, Result};

/// Tuning knobs for committing documents to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying the advisory lock on the target
    pub lock_timeout: Duration,
    /// Flush the temp file to stable storage before the rename
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(5),
            enable_fsync: true,
        }
    }
}

/// Read the full contents of a resource.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::unavailable(path, e))
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so readers see either the old or the new
/// content, never a mix. While the target exists it is held under an
/// exclusive advisory lock for the duration of the commit.
///
/// A symlinked `path` is resolved first, so the file it points to is the one
/// replaced and the link itself survives. A read-only target is refused with
/// [`Error::ResourceUnavailable`] rather than replaced.
///
/// When `expected` is given the target's current bytes are fingerprinted
/// under the lock and the write is refused with
/// [`Error::ConcurrentModification`] if they differ.
pub fn write_atomic(
    path: &Path,
    content: &[u8],
    expected: Option<&Fingerprint>,
    config: RobustnessConfig,
) -> Result<()> {
    let target = resolve_target(path)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::unavailable(parent, e))?;
    }

    // Held until the function returns; dropping releases the lock
    let _guard = match open_for_lock(&target) {
        Ok(file) => {
            acquire_lock(&file, &target, config.lock_timeout)?;
            Some(file)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(Error::unavailable(&target, e)),
    };

    if let Some(expected) = expected {
        verify_unchanged(&target, expected)?;
    }

    let temp_path = temp_path_for(&target);
    let committed = write_temp(&temp_path, &target, content, config.enable_fsync).and_then(
        |()| fs::rename(&temp_path, &target).map_err(|e| Error::unavailable(&target, e)),
    );

    if committed.is_err() {
        // Best effort; the original error is what the caller needs
        let _ = fs::remove_file(&temp_path);
    }
    committed?;

    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        bytes = content.len(),
        "Committed atomically"
    );
    Ok(())
}

/// Follow symlinks to the file that actually holds the content.
///
/// A path that does not exist yet is used as given.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::unavailable(path, e)),
    }
}

/// Open an existing target for writing so it can be locked.
///
/// The rename only needs a writable directory, so the target's own mode is
/// checked here.
fn open_for_lock(target: &Path) -> std::io::Result<File> {
    let meta = fs::metadata(target)?;
    if meta.permissions().readonly() {
        return Err(std::io::Error::new(
            ErrorKind::PermissionDenied,
            "resource is read-only",
        ));
    }
    OpenOptions::new().write(true).open(target)
}

/// Generate temp file path in the same directory (ensures same filesystem).
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

fn write_temp(temp_path: &Path, target: &Path, content: &[u8], fsync: bool) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::unavailable(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::unavailable(temp_path, e))?;

    if fsync {
        temp_file
            .sync_all()
            .map_err(|e| Error::unavailable(temp_path, e))?;
    }

    // Keep the target's mode (e.g. executable scripts) across the rename
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(temp_path, meta.permissions())
            .map_err(|e| Error::unavailable(temp_path, e))?;
    }

    Ok(())
}

fn acquire_lock(file: &File, path: &Path, timeout: Duration) -> Result<()> {
    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_elapsed_time(Some(timeout))
        .build();

    backoff::retry(policy, || {
        file.try_lock_exclusive().map_err(backoff::Error::transient)
    })
    .map_err(|_| {
        tracing::warn!(path = %path.display(), ?timeout, "Gave up waiting for lock");
        Error::LockFailed {
            path: path.to_path_buf(),
        }
    })
}

fn verify_unchanged(path: &Path, expected: &Fingerprint) -> Result<()> {
    let actual = match fs::read(path) {
        Ok(bytes) => Fingerprint::of_bytes(&bytes).to_string(),
        Err(e) if e.kind() == ErrorKind::NotFound => "<missing>".to_string(),
        Err(e) => return Err(Error::unavailable(path, e)),
    };

    if actual != expected.as_str() {
        return Err(Error::ConcurrentModification {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("dir/file.tsx"));
        assert_eq!(temp.parent(), Some(Path::new("dir")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".file.tsx."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn default_config_syncs() {
        let config = RobustnessConfig::default();
        assert!(config.enable_fsync);
        assert_eq!(config.lock_timeout, Duration::from_secs(5));
    }
}
