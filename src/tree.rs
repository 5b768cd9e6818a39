//! In-memory document trees.
//!
//! A [`DocumentTree`] maps relative POSIX paths to UTF-8 text. Iteration is
//! always in byte-wise path order so every consumer sees the same sequence.

use std::borrow::Cow;
use std::collections::BTreeMap;

use memchr::memchr;

use crate::error::{Error, Result};

/// Name of the entry that must open every OCF container.
pub const MIMETYPE_PATH: &str = "mimetype";

/// Exact content of the `mimetype` entry.
pub const EPUB_MEDIA_TYPE: &str = "application/epub+zip";

/// A fixture's files, keyed by relative path.
///
/// Built once through [`DocumentTree::with_file`] (or collected from an
/// iterator) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTree {
    files: BTreeMap<String, String>,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. A later call with the same path replaces the earlier content.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True when the tree carries a `mimetype` file with the exact EPUB media type.
    pub fn has_epub_mimetype(&self) -> bool {
        self.get(MIMETYPE_PATH) == Some(EPUB_MEDIA_TYPE)
    }

    /// Check every path against the relative-path rules, and that no file
    /// path is also used as a directory of another file.
    pub fn validate(&self) -> Result<()> {
        for path in self.paths() {
            validate_path(path)?;

            let shadowed = path
                .match_indices('/')
                .any(|(idx, _)| self.files.contains_key(&path[..idx]));
            if shadowed {
                return Err(Error::InvalidPath(path.to_string()));
            }
        }
        Ok(())
    }
}

impl<P, C> FromIterator<(P, C)> for DocumentTree
where
    P: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(p, c)| (p.into(), c.into()))
                .collect(),
        }
    }
}

/// Reject paths that are absolute, use backslashes, or contain empty,
/// `.` or `..` segments.
pub fn validate_path(path: &str) -> Result<()> {
    let well_formed = !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if well_formed {
        Ok(())
    } else {
        Err(Error::InvalidPath(path.to_string()))
    }
}

/// Convert `\r\n` and lone `\r` terminators to `\n`.
///
/// Borrows the input when it contains no carriage return.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr(b'\r', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);

    let mut chars = text[first..].chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }

    Cow::Owned(out)
}
