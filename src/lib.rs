//! # direx
//!
//! Immutable filesystem entry descriptors — portable type bits, symlink
//! resolution, zero opinions.
//!
//! direx models what a directory walk *produces*, not the walk itself. It
//! owns the entry value type ([`Dirent`]), the portable node-type mask
//! ([`TypeBits`]), the error types, and a by-name sortable collection
//! ([`Dirents`]). It does **not** own traversal, listing caches, or output
//! formatting — those belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! let entry = direx::lstat("Cargo.toml").unwrap();
//!
//! assert_eq!(entry.name(), "Cargo.toml");
//! assert_eq!(entry.path(), std::path::Path::new("Cargo.toml"));
//! assert!(entry.is_regular());
//! assert!(!entry.is_dir());
//! ```
//!
//! A [`Dirent`] is a snapshot: path verbatim as supplied, base name, and the
//! node's own type bits from a link-preserving stat. Nothing mutates after
//! construction, so entries are freely shareable across threads.
//!
//! # Enumerator Interop
//!
//! Statting every path is the rare case. Enumerators already know each
//! node's type, and direx converts their entries without a redundant stat:
//!
//! ```rust
//! use direx::Dirent;
//!
//! let entries = std::fs::read_dir("src")
//!     .unwrap()
//!     .map(|e| Dirent::from_read_dir(&e.unwrap()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert!(entries.iter().all(|e| e.is_regular() || e.is_dir()));
//! ```
//!
//! # Sorting
//!
//! [`Dirents`] wraps a fixed-length sequence of entries and feeds a by-name
//! ordering to the standard library's sort. Comparison is byte-wise, so
//! uppercase sorts before lowercase:
//!
//! ```rust
//! use direx::{Dirent, Dirents, TypeBits};
//!
//! let mut entries: Dirents = ["banana", "Apple", "cherry"]
//!     .into_iter()
//!     .map(|p| Dirent::from_parts(p, TypeBits::empty()))
//!     .collect();
//!
//! entries.sort_by_name();
//!
//! let names: Vec<_> = entries.iter().map(|e| e.name().to_os_string()).collect();
//! assert_eq!(names, ["Apple", "banana", "cherry"]);
//! ```
//!
//! # Symlink Resolution
//!
//! [`Dirent::follow_symlink`] resolves a link chain to a brand-new entry for
//! the final target. On any failure the original entry rides along in the
//! error, so callers can always fall back to the unresolved link:
//!
//! ```rust,no_run
//! let entry = direx::lstat("/etc/localtime").unwrap();
//!
//! match entry.follow_symlink() {
//!     Ok(target) => println!("resolves to {}", target.path().display()),
//!     Err(err) => {
//!         let original = err.into_dirent();
//!         println!("left unresolved: {}", original.path().display());
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

use std::path::PathBuf;

mod entry;
mod error;
mod mode;
mod sort;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use entry::Dirent;
pub use error::{DirentError, FollowError};
pub use mode::TypeBits;
pub use sort::Dirents;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Stat `path` without following a final symlink, and describe the node.
///
/// Free-function alias for [`Dirent::new`]. The returned entry's bits are
/// the node's own; a symlink is reported as a symlink, never as its target.
///
/// # Errors
///
/// [`DirentError::Stat`] when the node does not exist or the status query
/// fails.
///
/// # Example
///
/// ```rust
/// let src = direx::lstat("src").unwrap();
/// assert!(src.is_dir());
/// ```
pub fn lstat(path: impl Into<PathBuf>) -> Result<Dirent, DirentError> {
    Dirent::new(path)
}
