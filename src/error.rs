//! Error types for fixture generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while materializing, packaging, or verifying fixtures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Missing mimetype file in {}", .0.display())]
    MissingMimetype(PathBuf),

    #[error("Invalid tree path: {0:?}")]
    InvalidPath(String),

    #[error("Invalid container: {0}")]
    InvalidContainer(String),
}

impl Error {
    /// Attach the filesystem path an I/O failure happened on.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
