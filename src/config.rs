//! Generator configuration.

use std::path::{Path, PathBuf};

/// Directory fixtures are written to when no other root is configured.
pub const DEFAULT_FIXTURES_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/ebooks/fixtures");

/// Settings shared by the materializer and packager for one run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding one subdirectory and one `.epub` per fixture.
    pub fixtures_root: PathBuf,
    /// Compression level for deflated entries (0-9, default 6).
    pub compression_level: Option<i64>,
}

impl GeneratorConfig {
    pub fn new(fixtures_root: impl Into<PathBuf>) -> Self {
        Self {
            fixtures_root: fixtures_root.into(),
            compression_level: None,
        }
    }

    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level.clamp(0, 9));
        self
    }

    pub fn fixtures_root(&self) -> &Path {
        &self.fixtures_root
    }

    /// Directory a fixture is materialized into.
    pub fn fixture_dir(&self, name: &str) -> PathBuf {
        self.fixtures_root.join(name)
    }

    /// Archive a fixture is packaged into.
    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.fixtures_root.join(format!("{name}.epub"))
    }

    pub(crate) fn deflate_level(&self) -> i64 {
        self.compression_level.unwrap_or(6)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURES_ROOT)
    }
}
