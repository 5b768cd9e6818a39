//! # navfix
//!
//! Generates a small, deterministic corpus of EPUB fixtures for testing
//! navigation and table-of-contents readers.
//!
//! Each fixture is a [`DocumentTree`] from the [`Catalog`]. Generation
//! expands the tree under the fixtures root and packages it into an OCF
//! container whose first entry is an uncompressed `mimetype`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use navfix::{Catalog, GeneratorConfig, generate};
//!
//! let catalog = Catalog::standard();
//! let config = GeneratorConfig::default();
//! for fixture in generate(&catalog, &config)? {
//!     println!("{} -> {}", fixture.name, fixture.archive.display());
//! }
//! # Ok::<(), navfix::Error>(())
//! ```
//!
//! ## Custom Trees
//!
//! ```no_run
//! use navfix::{DocumentTree, GeneratorConfig, materialize_tree, package};
//! use std::path::Path;
//!
//! let tree = DocumentTree::new()
//!     .with_file("mimetype", "application/epub+zip")
//!     .with_file("META-INF/container.xml", "<container/>");
//!
//! let dir = Path::new("out/custom");
//! materialize_tree(dir, &tree)?;
//! let archive = package(dir, &GeneratorConfig::default())?;
//! # Ok::<(), navfix::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod materialize;
pub mod package;
mod partial;
pub mod tree;
pub mod verify;

pub use catalog::{Catalog, Fixture};
pub use config::{DEFAULT_FIXTURES_ROOT, GeneratorConfig};
pub use corpus::{GeneratedFixture, ensure_corpus, generate};
pub use error::{Error, Result};
pub use materialize::{materialize, materialize_tree};
pub use package::{package, package_to_writer};
pub use tree::{DocumentTree, EPUB_MEDIA_TYPE, MIMETYPE_PATH};
pub use verify::{ArchiveReport, verify_archive};
