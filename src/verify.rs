//! Read-back checks for produced archives.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::{CompressionMethod, ZipArchive};

use crate::error::{Error, Result};
use crate::tree::{DocumentTree, EPUB_MEDIA_TYPE, MIMETYPE_PATH, normalize_line_endings};

/// What a verified archive contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Entry names in physical order.
    pub entries: Vec<String>,
}

/// Check the archive at `path` against the container contract and `tree`.
pub fn verify_archive(path: &Path, tree: &DocumentTree) -> Result<ArchiveReport> {
    let file = File::open(path).map_err(Error::io(path))?;
    verify_archive_from_reader(file, tree)
}

/// Same as [`verify_archive`] for any [`Read`] + [`Seek`] source.
pub fn verify_archive_from_reader<R: Read + Seek>(
    reader: R,
    tree: &DocumentTree,
) -> Result<ArchiveReport> {
    let mut archive = ZipArchive::new(reader)?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        if entry.is_dir() {
            return Err(invalid(format!("directory entry {name:?}")));
        }

        let expected_method = if index == 0 {
            if name != MIMETYPE_PATH {
                return Err(invalid(format!("first entry is {name:?}, expected mimetype")));
            }
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        };
        if entry.compression() != expected_method {
            return Err(invalid(format!(
                "entry {name:?} uses {:?}, expected {expected_method:?}",
                entry.compression()
            )));
        }

        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;

        if index == 0 && data != EPUB_MEDIA_TYPE.as_bytes() {
            return Err(invalid(format!("mimetype content is {:?}", String::from_utf8_lossy(&data))));
        }

        let Some(source) = tree.get(&name) else {
            return Err(invalid(format!("unexpected entry {name:?}")));
        };
        if data != normalize_line_endings(source).as_bytes() {
            return Err(invalid(format!("entry {name:?} differs from its source")));
        }

        entries.push(name);
    }

    let seen: BTreeSet<&str> = entries.iter().map(String::as_str).collect();
    if let Some(missing) = tree.paths().find(|p| !seen.contains(p)) {
        return Err(invalid(format!("missing entry {missing:?}")));
    }
    if seen.len() != entries.len() {
        return Err(invalid("duplicate entry names".to_string()));
    }

    Ok(ArchiveReport { entries })
}

fn invalid(message: String) -> Error {
    Error::InvalidContainer(message)
}
