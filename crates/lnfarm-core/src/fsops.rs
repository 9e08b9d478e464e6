//! Filesystem primitives shared by the reconciler
//!
//! Every helper here re-queries the filesystem on each call. Nothing is
//! cached between descriptors, so a benign concurrent change only makes a
//! report slightly stale.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// What currently occupies a path, without following a final symlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    /// Nothing exists at the path
    Absent,
    /// A symbolic link with the given referent (possibly dangling)
    Symlink(PathBuf),
    /// A regular file, directory, or any other non-link entry
    Other,
}

/// Result of preparing the parent directories of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirStatus {
    /// All directories exist; lists the ones created by this call, outermost first
    Ready(Vec<PathBuf>),
    /// A non-directory entry sits where a directory is needed
    Blocked(PathBuf),
}

/// Inspect `path` the way `lstat` would.
///
/// # Errors
///
/// Returns an error if the path cannot be examined for reasons other than
/// not existing, e.g. a permission problem.
pub fn inspect(path: &Path) -> Result<EntryState> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(EntryState::Absent);
        }
        Err(e) => return Err(Error::io("stat", path, e)),
    };

    if metadata.is_symlink() {
        let referent = fs::read_link(path).map_err(|e| Error::io("readlink", path, e))?;
        Ok(EntryState::Symlink(referent))
    } else {
        Ok(EntryState::Other)
    }
}

/// Create `dir` and any missing ancestors, like `mkdir -p`.
///
/// Walks up to the first existing ancestor, then creates the missing
/// directories top-down. A directory that appears between the check and the
/// `mkdir` counts as success.
///
/// Below `boundary` only real directories qualify: a symlink there blocks,
/// even one that resolves to a directory, so nothing is ever written through
/// a link. `boundary` itself and its ancestors may be reached via symlinks.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or examined.
pub fn ensure_dir_all(dir: &Path, boundary: &Path) -> Result<DirStatus> {
    let mut missing = Vec::new();
    let mut current = Some(dir);

    while let Some(path) = current {
        let inside = path != boundary && path.starts_with(boundary);
        let probed = if inside {
            fs::symlink_metadata(path)
        } else {
            fs::metadata(path)
        };

        match probed {
            Ok(metadata) if metadata.is_symlink() => {
                return Ok(DirStatus::Blocked(path.to_path_buf()));
            }
            Ok(metadata) if metadata.is_dir() => break,
            Ok(_) => return Ok(DirStatus::Blocked(path.to_path_buf())),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                // A dangling symlink also reports NotFound when followed.
                if !inside && fs::symlink_metadata(path).is_ok() {
                    return Ok(DirStatus::Blocked(path.to_path_buf()));
                }
                missing.push(path);
                current = path.parent();
            }
            Err(e) => return Err(Error::io("stat", path, e)),
        }
    }

    let mut created = Vec::new();
    for path in missing.into_iter().rev() {
        match fs::create_dir(path) {
            Ok(()) => created.push(path.to_path_buf()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {}
            Err(e) => return Err(Error::io("mkdir", path, e)),
        }
    }

    Ok(DirStatus::Ready(created))
}

/// Remove `start` and then each ancestor while they are empty.
///
/// The ascent never removes `boundary` or anything outside it, and stops at
/// the first directory that cannot be removed (usually because it is not
/// empty). Returns the removed directories, innermost first.
#[must_use]
pub fn prune_empty_dirs(start: &Path, boundary: &Path) -> Vec<PathBuf> {
    let mut pruned = Vec::new();
    let mut current = start;

    while current != boundary && current.starts_with(boundary) {
        if let Err(e) = fs::remove_dir(current) {
            debug!("keep {}: {e}", current.display());
            break;
        }
        pruned.push(current.to_path_buf());

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    pruned
}

/// Create a symbolic link at `link` pointing to `referent`.
///
/// # Errors
///
/// Returns an error if the link cannot be created.
pub fn symlink(referent: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    let created = std::os::unix::fs::symlink(referent, link);
    #[cfg(windows)]
    let created = if referent.is_dir() {
        std::os::windows::fs::symlink_dir(referent, link)
    } else {
        std::os::windows::fs::symlink_file(referent, link)
    };

    created.map_err(|e| Error::io("symlink", link, e))
}

/// Remove the symbolic link at `link` without touching its referent.
///
/// # Errors
///
/// Returns an error if the link cannot be removed.
pub fn remove_link(link: &Path) -> Result<()> {
    #[cfg(windows)]
    if link.is_dir() {
        return fs::remove_dir(link).map_err(|e| Error::io("unlink", link, e));
    }

    fs::remove_file(link).map_err(|e| Error::io("unlink", link, e))
}
