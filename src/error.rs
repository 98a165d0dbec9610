use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::entry::Dirent;

#[derive(Error, Debug)]
pub enum DirentError {
    /// The link-preserving status query failed: the node does not exist,
    /// permission was denied, or the syscall itself errored.
    #[error("stat failed")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A symlink chain could not be resolved to a final target, e.g. a
    /// dangling link or a resolution loop.
    #[error("symlink resolution failed")]
    Resolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Absolute-path computation failed for an already-resolved target.
    #[error("absolute path computation failed")]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DirentError {
    /// The path this error occurred at.
    /// Callers use this to present "skipped: <path>" without pattern matching
    /// on variants.
    pub fn path(&self) -> &Path {
        match self {
            Self::Stat { path, .. }
            | Self::Resolution { path, .. }
            | Self::Path { path, .. } => path,
        }
    }
}

/// Failure of [`Dirent::follow_symlink`], carrying the original entry.
///
/// Resolution never leaves the caller empty-handed: whatever step failed,
/// the entry that went in comes back out unchanged, and callers can log the
/// error and proceed with the unresolved link. No partially-resolved entry
/// escapes through this type.
///
/// [`Dirent::follow_symlink`]: crate::Dirent::follow_symlink
#[derive(Error, Debug)]
#[error("symlink left unresolved")]
pub struct FollowError {
    dirent: Dirent,
    #[source]
    source: DirentError,
}

impl FollowError {
    pub(crate) fn new(dirent: Dirent, source: DirentError) -> Self {
        Self { dirent, source }
    }

    /// The original, unresolved entry.
    pub fn dirent(&self) -> &Dirent {
        &self.dirent
    }

    /// Recover ownership of the original entry, discarding the error.
    pub fn into_dirent(self) -> Dirent {
        self.dirent
    }

    /// Split into the original entry and the underlying error.
    pub fn into_parts(self) -> (Dirent, DirentError) {
        (self.dirent, self.source)
    }
}
