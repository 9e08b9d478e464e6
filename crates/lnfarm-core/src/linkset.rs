//! Link-set computation
//!
//! Walks the source roots and maps every file found onto a position in the
//! target tree. Nothing here touches the target; conflicts between sources
//! are left for the reconciler to detect against the live filesystem.

mod builder;


use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use builder::LinkSetBuilder;

/// One computed mapping from a target-relative path to an absolute source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    target_root: Arc<Path>,
    target_relative_path: PathBuf,
    source_absolute_path: PathBuf,
}

impl LinkDescriptor {
    pub(crate) fn new(
        target_root: Arc<Path>,
        target_relative_path: PathBuf,
        source_absolute_path: PathBuf,
    ) -> Self {
        Self {
            target_root,
            target_relative_path,
            source_absolute_path,
        }
    }

    /// Root of the target tree this descriptor belongs to
    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Position of the link relative to the target root
    #[must_use]
    pub fn target_relative_path(&self) -> &Path {
        &self.target_relative_path
    }

    /// Absolute path the link should point to
    #[must_use]
    pub fn source_absolute_path(&self) -> &Path {
        &self.source_absolute_path
    }

    /// Absolute path of the link itself
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.target_root.join(&self.target_relative_path)
    }
}

/// Ordered link descriptors sharing one target root
///
/// Order is significant: when several descriptors name the same target path,
/// the first one applied owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSet {
    target_root: Arc<Path>,
    descriptors: Vec<LinkDescriptor>,
}

impl LinkSet {
    pub(crate) fn new(target_root: Arc<Path>, descriptors: Vec<LinkDescriptor>) -> Self {
        Self {
            target_root,
            descriptors,
        }
    }

    /// Absolute target root
    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Descriptors in application order
    #[must_use]
    pub fn descriptors(&self) -> &[LinkDescriptor] {
        &self.descriptors
    }

    /// Iterate descriptors in application order
    pub fn iter(&self) -> std::slice::Iter<'_, LinkDescriptor> {
        self.descriptors.iter()
    }

    /// Number of descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptors were gathered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a LinkDescriptor;
    type IntoIter = std::slice::Iter<'a, LinkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
