//! Staging paths that disappear unless committed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A file or directory being assembled under a temporary name.
///
/// Removed on drop unless [`Partial::persist`] moved it into place.
pub(crate) struct Partial {
    path: PathBuf,
    armed: bool,
}

impl Partial {
    /// Stage at `path`, clearing anything a crashed earlier run left there.
    pub(crate) fn new(path: PathBuf) -> Result<Self> {
        remove_path(&path)?;
        Ok(Self { path, armed: true })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn persist(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target).map_err(Error::io(target))?;
        self.armed = false;
        Ok(())
    }
}

impl Drop for Partial {
    fn drop(&mut self) {
        if self.armed {
            let _ = remove_path(&self.path);
        }
    }
}

/// Remove a file or directory tree; a missing path is not an error.
pub(crate) fn remove_path(path: &Path) -> Result<()> {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(Error::io(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dropped_partial_dir_is_removed() {
        let tmp = TempDir::new().unwrap();
        let staging = tmp.path().join("fx.partial");
        {
            let partial = Partial::new(staging.clone()).unwrap();
            fs::create_dir_all(partial.path().join("EPUB")).unwrap();
            fs::write(partial.path().join("EPUB/c1.xhtml"), "<html/>").unwrap();
        }
        assert!(!staging.exists());
    }

    #[test]
    fn test_persist_moves_into_place() {
        let tmp = TempDir::new().unwrap();
        let partial = Partial::new(tmp.path().join("a.epub.partial")).unwrap();
        fs::write(partial.path(), b"zip").unwrap();

        let target = tmp.path().join("a.epub");
        partial.persist(&target).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"zip");
        assert!(!tmp.path().join("a.epub.partial").exists());
    }

    #[test]
    fn test_leftover_staging_is_cleared() {
        let tmp = TempDir::new().unwrap();
        let staging = tmp.path().join("fx.partial");
        fs::write(&staging, "left by a crash").unwrap();

        let partial = Partial::new(staging.clone()).unwrap();
        assert!(!partial.path().exists());
        assert!(remove_path(&tmp.path().join("never-existed")).is_ok());
    }
}
