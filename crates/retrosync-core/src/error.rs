//! Error taxonomy for a sync run.
//!
//! Configuration errors are fatal and abort the run before any network
//! activity. Everything else is raised per item, logged with the item's
//! name, and the run moves on to the next item.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The frontend config file does not exist or could not be read.
    #[error("frontend config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// A line in the frontend config could not be parsed as `key = value`.
    #[error("could not parse config line: {0:?}")]
    ConfigParse(String),

    /// A required option is absent from the frontend config.
    #[error("missing required config option: {0}")]
    MissingKey(&'static str),

    /// Connection failure, non-2xx status, or body read error.
    #[error("network: {0}")]
    Network(String),

    /// The downloaded file is not a readable zip archive.
    #[error("corrupt archive: {0}")]
    CorruptArchive(#[from] zip::result::ZipError),

    /// An archive entry's path would land outside the destination directory.
    #[error("archive entry escapes destination: {0:?}")]
    PathTraversal(String),

    #[error("filesystem: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl SyncError {
    /// Fatal errors abort the whole run; the rest are isolated per item.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::ConfigNotFound(_) | SyncError::ConfigParse(_) | SyncError::MissingKey(_)
        )
    }
}
