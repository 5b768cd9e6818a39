//! Whole-corpus generation.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::materialize::materialize;
use crate::package::write_archive;
use crate::partial::remove_path;

static ENSURE_LOCK: Mutex<()> = Mutex::new(());

/// Outputs written for one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixture {
    pub name: &'static str,
    pub directory: PathBuf,
    pub archive: PathBuf,
    /// Archive entry names in physical order.
    pub entries: Vec<String>,
}

/// Materialize and package every fixture in catalog order.
///
/// Stops at the first failure; fixtures completed before it stay on disk.
pub fn generate(catalog: &Catalog, config: &GeneratorConfig) -> Result<Vec<GeneratedFixture>> {
    let root = config.fixtures_root();
    fs::create_dir_all(root).map_err(Error::io(root))?;

    let mut generated = Vec::with_capacity(catalog.len());
    for fixture in catalog {
        // An archive from an older catalog must not outlive a failed rewrite.
        remove_path(&config.archive_path(fixture.name()))?;

        let directory = materialize(root, fixture)?;
        let (archive, entries) = write_archive(&directory, config)?;

        info!(
            fixture = fixture.name(),
            entries = entries.len(),
            archive = %archive.display(),
            "generated fixture"
        );

        generated.push(GeneratedFixture {
            name: fixture.name(),
            directory,
            archive,
            entries,
        });
    }

    Ok(generated)
}

/// Generate the corpus only if some fixture directory or archive is missing.
///
/// Returns `true` when generation ran. Concurrent callers in one process are
/// serialized, so parallel test threads sharing a root see either a complete
/// corpus or wait for the thread regenerating it.
pub fn ensure_corpus(catalog: &Catalog, config: &GeneratorConfig) -> Result<bool> {
    let _guard = ENSURE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let complete = catalog.names().all(|name| {
        config.fixture_dir(name).is_dir() && config.archive_path(name).is_file()
    });
    if complete {
        return Ok(false);
    }

    generate(catalog, config)?;
    Ok(true)
}
