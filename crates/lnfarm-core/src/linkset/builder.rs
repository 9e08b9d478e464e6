//! Source walking and descriptor construction

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use super::{LinkDescriptor, LinkSet};
use crate::config::PatternMatcher;
use crate::error::{Error, Result};

/// Builds the ordered link set for one invocation
#[derive(Debug, Default)]
pub struct LinkSetBuilder {
    matcher: PatternMatcher,
}

impl LinkSetBuilder {
    /// Builder that links every entry it finds
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matcher: PatternMatcher::new(),
        }
    }

    /// Builder that skips entries matched by `matcher`
    #[must_use]
    pub const fn with_matcher(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Gather descriptors for every source root, in the order given
    ///
    /// Directory roots are walked recursively and every non-directory entry
    /// below them (regular files and symlinks alike) becomes one descriptor.
    /// A plain file root becomes a single descriptor named after the file.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceNotFound`] if any source root does not exist. Nothing
    ///   gathered from earlier roots is returned.
    /// - [`Error::Walk`] if a source directory cannot be traversed.
    pub fn build<P: AsRef<Path>>(&self, target_root: &Path, source_roots: &[P]) -> Result<LinkSet> {
        let target_root: Arc<Path> = Arc::from(resolve_target_root(target_root)?);
        let mut descriptors = Vec::new();

        for source_root in source_roots {
            let source_root = source_root.as_ref();
            let metadata = match fs::metadata(source_root) {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(Error::SourceNotFound(source_root.to_path_buf()));
                }
                Err(e) => return Err(Error::io("stat", source_root, e)),
            };

            let before = descriptors.len();
            if metadata.is_dir() {
                self.walk_directory(&target_root, source_root, &mut descriptors)?;
            } else {
                let source = resolve_leaf(source_root)?;
                if let Some(name) = source.file_name().map(PathBuf::from) {
                    descriptors.push(LinkDescriptor::new(Arc::clone(&target_root), name, source));
                }
            }

            debug!(
                "gathered {} entries from {}",
                descriptors.len() - before,
                source_root.display()
            );
        }

        Ok(LinkSet::new(target_root, descriptors))
    }

    /// Walk one source directory, appending a descriptor per leaf entry
    fn walk_directory(
        &self,
        target_root: &Arc<Path>,
        source_root: &Path,
        descriptors: &mut Vec<LinkDescriptor>,
    ) -> Result<()> {
        let root = dunce::canonicalize(source_root)
            .map_err(|e| Error::io("canonicalize", source_root, e))?;

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // The target tree may sit inside a source; never link it into itself.
                if entry.path() == &**target_root {
                    debug!("skip target tree {}", entry.path().display());
                    return false;
                }
                entry.path().strip_prefix(&root).is_ok_and(|rel| {
                    self.matcher
                        .should_include(rel, entry.file_type().is_dir())
                })
            });

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                root: source_root.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };

            descriptors.push(LinkDescriptor::new(
                Arc::clone(target_root),
                relative.to_path_buf(),
                entry.path().to_path_buf(),
            ));
        }

        Ok(())
    }
}

/// Absolute form of the target root, canonical when it already exists
fn resolve_target_root(target_root: &Path) -> Result<PathBuf> {
    if fs::symlink_metadata(target_root).is_ok() {
        dunce::canonicalize(target_root).map_err(|e| Error::io("canonicalize", target_root, e))
    } else {
        std::path::absolute(target_root).map_err(|e| Error::io("resolve", target_root, e))
    }
}

/// Absolute path of a leaf entry with its parent canonicalized
///
/// The final component is kept as-is so a symlink given as a source is linked
/// to, not resolved.
fn resolve_leaf(path: &Path) -> Result<PathBuf> {
    let Some(name) = path.file_name() else {
        return dunce::canonicalize(path).map_err(|e| Error::io("canonicalize", path, e));
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let parent = dunce::canonicalize(parent).map_err(|e| Error::io("canonicalize", parent, e))?;
    Ok(parent.join(name))
}
