//! OCF archive packaging.
//!
//! Turns a materialized fixture directory into an EPUB container: `mimetype`
//! first and stored, everything else deflated in sorted path order.

use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::partial::{Partial, remove_path};
use crate::tree::MIMETYPE_PATH;

/// Package `dir` into a sibling `<dir>.epub`, replacing any existing archive.
///
/// The archive is assembled under a `.partial` name and only renamed into
/// place once the central directory has been written, so a failure never
/// leaves a truncated `.epub` behind.
pub fn package(dir: &Path, config: &GeneratorConfig) -> Result<PathBuf> {
    write_archive(dir, config).map(|(archive, _)| archive)
}

/// [`package`], also returning the entry names in written order.
pub(crate) fn write_archive(dir: &Path, config: &GeneratorConfig) -> Result<(PathBuf, Vec<String>)> {
    require_mimetype(dir)?;

    let archive = archive_path_for(dir)?;
    if archive.exists() {
        debug!(archive = %archive.display(), "removing stale archive");
        remove_path(&archive)?;
    }

    let partial = Partial::new(archive.with_extension("epub.partial"))?;
    let mut file = File::create(partial.path()).map_err(Error::io(partial.path()))?;
    let entries = package_to_writer(dir, &mut file, config)?;
    file.sync_all().map_err(Error::io(partial.path()))?;
    drop(file);

    partial.persist(&archive)?;
    Ok((archive, entries))
}

/// Write the container for `dir` into any [`Write`] + [`Seek`] destination.
///
/// Returns the entry names in the order they were written.
pub fn package_to_writer<W: Write + Seek>(
    dir: &Path,
    writer: &mut W,
    config: &GeneratorConfig,
) -> Result<Vec<String>> {
    let mimetype = require_mimetype(dir)?;

    // Fixed timestamps keep repeated runs byte-identical.
    let stored = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default());
    let deflated = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(config.deflate_level()))
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(writer);
    let mut entries = Vec::new();

    // 1. mimetype (must be first, uncompressed)
    zip.start_file(MIMETYPE_PATH, stored)?;
    copy_file(&mimetype, &mut zip)?;
    entries.push(MIMETYPE_PATH.to_string());

    // 2. Everything else, directories skipped
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry_name(dir, entry.path());
        if name == MIMETYPE_PATH {
            continue;
        }

        debug!(entry = %name, "deflating entry");
        zip.start_file(name.as_str(), deflated)?;
        copy_file(entry.path(), &mut zip)?;
        entries.push(name);
    }

    zip.finish()?;
    Ok(entries)
}

/// Archive path for a fixture directory: the directory's name plus `.epub`.
fn archive_path_for(dir: &Path) -> Result<PathBuf> {
    let name = dir
        .file_name()
        .ok_or_else(|| Error::InvalidPath(dir.display().to_string()))?;
    let mut file_name = name.to_os_string();
    file_name.push(".epub");
    Ok(dir.with_file_name(file_name))
}

fn require_mimetype(dir: &Path) -> Result<PathBuf> {
    let mimetype = dir.join(MIMETYPE_PATH);
    if mimetype.is_file() {
        Ok(mimetype)
    } else {
        Err(Error::MissingMimetype(dir.to_path_buf()))
    }
}

/// Forward-slash entry name for `path` relative to `root`.
fn entry_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn copy_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let mut file = File::open(path).map_err(Error::io(path))?;
    io::copy(&mut file, out).map_err(Error::io(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_archive_path_is_sibling() {
        let archive = archive_path_for(Path::new("/fx/epub3_edge_hrefs")).unwrap();
        assert_eq!(archive, Path::new("/fx/epub3_edge_hrefs.epub"));
    }

    #[test]
    fn test_entry_name_uses_forward_slashes() {
        let root = Path::new("/fx/a");
        let path = root.join("EPUB").join("file name.xhtml");
        assert_eq!(entry_name(root, &path), "EPUB/file name.xhtml");
    }

    #[test]
    fn test_missing_mimetype_fails_fast() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("content.opf"), "<package/>").unwrap();

        let mut out = Cursor::new(Vec::new());
        let err = package_to_writer(tmp.path(), &mut out, &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingMimetype(_)));
        assert!(out.get_ref().is_empty());
    }

    #[test]
    fn test_mimetype_written_first() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("A")).unwrap();
        fs::write(tmp.path().join("A/first.xhtml"), "<html/>").unwrap();
        fs::write(tmp.path().join("mimetype"), "application/epub+zip").unwrap();

        let mut out = Cursor::new(Vec::new());
        let entries = package_to_writer(tmp.path(), &mut out, &GeneratorConfig::default()).unwrap();
        assert_eq!(entries, vec!["mimetype", "A/first.xhtml"]);
    }
}
