//! Error types for tree construction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures encountered while building a tree.
///
/// Neither variant is fatal to a run: an unreadable root is skipped by the
/// caller, and a failed listing leaves the directory node without children.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A requested root could not be stat'd.
    #[error("cannot access '{}': {source}", path.display())]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents of a directory could not be enumerated.
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            WalkError::PathUnreadable { path, .. } => path,
            WalkError::DirectoryListingFailed { path, .. } => path,
        }
    }
}
