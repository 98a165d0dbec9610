use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DirentError, FollowError};
use crate::mode::TypeBits;

/// An immutable descriptor of one filesystem node.
///
/// A `Dirent` records three things, fixed at construction: the path exactly
/// as it was supplied (absolute or relative, never normalized), the final
/// component of that path, and the node's [`TypeBits`]. The bits always
/// describe the node itself, never a symlink's target — every constructor
/// goes through a link-preserving status query.
///
/// Construction is cheap to share: `Dirent` is `Clone`, and because nothing
/// mutates after construction, values can be read from any number of threads
/// without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirent {
    path: PathBuf,
    name: OsString,
    bits: TypeBits,
}

impl Dirent {
    /// Stat `path` (without following a final symlink) and build a `Dirent`
    /// for it.
    ///
    /// This is the explicit-construction convenience. Code that already holds
    /// an enumerator's entry should prefer [`Dirent::from_read_dir`] or
    /// [`Dirent::from_walk`], which reuse the type information the enumerator
    /// carries instead of paying a redundant stat.
    ///
    /// # Errors
    ///
    /// [`DirentError::Stat`] when the node does not exist or the status query
    /// fails (permission denied, I/O error).
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DirentError> {
        let path = path.into();
        let meta = fs::symlink_metadata(&path).map_err(|source| DirentError::Stat {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_parts(path, TypeBits::from_file_type(meta.file_type())))
    }

    /// Build a `Dirent` from a path and already-known type bits. No I/O.
    ///
    /// This is the hook for directory-enumeration code that learned the node
    /// type during the listing itself. The name is derived from `path` here,
    /// so it is always the path's final component regardless of what the
    /// enumerator knew.
    pub fn from_parts(path: impl Into<PathBuf>, bits: TypeBits) -> Self {
        let path = path.into();
        let name = base_name(&path);
        Self { path, name, bits }
    }

    /// Build a `Dirent` from a [`std::fs::read_dir`] item.
    ///
    /// Uses the entry's own [`file_type`](fs::DirEntry::file_type), which on
    /// most platforms is answered from the directory listing without another
    /// stat.
    ///
    /// # Errors
    ///
    /// [`DirentError::Stat`] when the type query fails.
    pub fn from_read_dir(entry: &fs::DirEntry) -> Result<Self, DirentError> {
        let ft = entry.file_type().map_err(|source| DirentError::Stat {
            path: entry.path(),
            source,
        })?;
        Ok(Self::from_parts(entry.path(), TypeBits::from_file_type(ft)))
    }

    /// Build a `Dirent` from an [`ignore::DirEntry`] produced by a walker.
    ///
    /// Uses the walker-reported file type when present. A walker entry with
    /// no type (stdin) falls back to [`Dirent::new`] and its stat.
    ///
    /// # Errors
    ///
    /// [`DirentError::Stat`] when the fallback stat fails.
    pub fn from_walk(entry: &ignore::DirEntry) -> Result<Self, DirentError> {
        match entry.file_type() {
            Some(ft) => Ok(Self::from_parts(
                entry.path().to_path_buf(),
                TypeBits::from_file_type(ft),
            )),
            None => Self::new(entry.path().to_path_buf()),
        }
    }

    /// The path this entry was created with, verbatim.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final component of [`path`](Dirent::path).
    ///
    /// For paths with no final component (`/`, a path ending in `..`) this is
    /// the whole path, so the name is never empty.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The raw node-type mask.
    pub fn type_bits(&self) -> TypeBits {
        self.bits
    }

    /// `true` iff the directory bit is set.
    ///
    /// Not exclusive with the other predicates. Some platforms report a
    /// symlink to a directory with both the directory and symlink bits set.
    pub fn is_dir(&self) -> bool {
        self.bits.contains(TypeBits::DIR)
    }

    /// `true` iff no type bit is set at all.
    ///
    /// Ordinary files are the zero value of the mask; there is no positive
    /// regular-file bit.
    pub fn is_regular(&self) -> bool {
        self.bits.is_regular()
    }

    /// `true` iff the symlink bit is set.
    pub fn is_symlink(&self) -> bool {
        self.bits.contains(TypeBits::SYMLINK)
    }

    /// `true` iff the device bit is set (block or character device).
    pub fn is_device(&self) -> bool {
        self.bits.contains(TypeBits::DEVICE)
    }

    /// Resolve this entry's symlink chain and describe the final target.
    ///
    /// A non-symlink entry is returned as-is, with no I/O. A symlink is
    /// resolved in three steps, each surfacing its own [`DirentError`] kind:
    /// the chain is resolved to its final target
    /// ([`Resolution`](DirentError::Resolution) on a dangling link or loop),
    /// the target path is made absolute ([`Path`](DirentError::Path)), and
    /// the target is re-statted into a brand-new entry
    /// ([`Stat`](DirentError::Stat) if it vanished in between). Nothing is
    /// retried; a race between the steps surfaces as that step's error.
    ///
    /// # Errors
    ///
    /// Every error comes wrapped in a [`FollowError`] that carries the
    /// original entry unchanged, so a caller that handed ownership in can
    /// always take it back and proceed with the unresolved link.
    pub fn follow_symlink(self) -> Result<Self, FollowError> {
        if !self.is_symlink() {
            return Ok(self);
        }

        let resolved = match fs::canonicalize(&self.path) {
            Ok(p) => p,
            Err(source) => {
                let path = self.path.clone();
                return Err(FollowError::new(
                    self,
                    DirentError::Resolution { path, source },
                ));
            }
        };

        let absolute = match std::path::absolute(&resolved) {
            Ok(p) => p,
            Err(source) => {
                return Err(FollowError::new(
                    self,
                    DirentError::Path {
                        path: resolved,
                        source,
                    },
                ));
            }
        };

        match Self::new(absolute) {
            Ok(target) => Ok(target),
            Err(err) => Err(FollowError::new(self, err)),
        }
    }
}

fn base_name(path: &Path) -> OsString {
    path.file_name().unwrap_or_else(|| path.as_os_str()).to_os_string()
}
