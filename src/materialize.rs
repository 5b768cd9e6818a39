//! Expand a document tree onto disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Fixture;
use crate::error::{Error, Result};
use crate::partial::{Partial, remove_path};
use crate::tree::{DocumentTree, normalize_line_endings};

/// Write `fixture` under `<root>/<name>`, replacing any earlier expansion.
///
/// Returns the fixture directory.
pub fn materialize(root: &Path, fixture: &Fixture) -> Result<PathBuf> {
    let dir = root.join(fixture.name());
    materialize_tree(&dir, fixture.tree())?;
    Ok(dir)
}

/// Write `tree` into `dir`, removing `dir` first if it exists.
///
/// Files are written into a `<dir>.partial` staging directory that is renamed
/// over `dir` only once every file is on disk. On failure neither the old nor
/// a half-written tree is left at `dir`.
pub fn materialize_tree(dir: &Path, tree: &DocumentTree) -> Result<()> {
    if dir.exists() {
        debug!(dir = %dir.display(), "removing stale fixture directory");
        remove_path(dir)?;
    }

    tree.validate()?;

    let staging = Partial::new(staging_path(dir)?)?;
    fs::create_dir_all(staging.path()).map_err(Error::io(staging.path()))?;

    for (rel, content) in tree.iter() {
        let path = staging.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::io(parent))?;
        }
        fs::write(&path, normalize_line_endings(content).as_bytes()).map_err(Error::io(&path))?;
    }

    staging.persist(dir)
}

fn staging_path(dir: &Path) -> Result<PathBuf> {
    let name = dir
        .file_name()
        .ok_or_else(|| Error::InvalidPath(dir.display().to_string()))?;
    let mut staged = name.to_os_string();
    staged.push(".partial");
    Ok(dir.with_file_name(staged))
}
