//! Filesystem utilities for atomic operations.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{EnczilError, Result};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `data` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The bytes go to a uniquely named temp file in the destination directory,
/// are synced, then renamed over `path`. On any failure the temp file is
/// removed and `path` is left untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path)?;
    tracing::debug!(temp = %temp_path.display(), "writing temp file");

    if let Err(err) = write_and_sync(&temp_path, data) {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                tracing::warn!(temp = %temp_path.display(), error = %cleanup, "temp file cleanup failed");
            }
        }
        return Err(EnczilError::io(
            format!("writing {}", temp_path.display()),
            err,
        ));
    }

    rename_with_fallback(&temp_path, path)
        .map_err(|e| EnczilError::io(format!("replacing {}", path.display()), e))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "atomic write complete");
    Ok(())
}

fn write_and_sync(temp_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let filename = path.file_name().ok_or_else(|| {
        EnczilError::Validation(format!("Invalid output filename: {}", path.display()))
    })?;
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| {
            EnczilError::io(
                "reading system time",
                io::Error::new(io::ErrorKind::Other, e),
            )
        })?
        .as_nanos();

    // Built as an OsString so non-UTF-8 names survive.
    let mut temp_name = OsString::from(".");
    temp_name.push(filename);
    temp_name.push(format!(".{}.{}.tmp", std::process::id(), nanos));
    Ok(parent.join(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_rename_new_file() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&temp).unwrap().write_all(b"test").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert!(dest.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "test");
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.enc");

        write_atomic(&dest, b"first").unwrap();
        write_atomic(&dest, b"second").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"second");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory_fails_cleanly() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("out.enc");

        let err = write_atomic(&dest, b"data").unwrap_err();
        assert!(err.is_not_found());
        assert!(!dest.exists());
    }
}
