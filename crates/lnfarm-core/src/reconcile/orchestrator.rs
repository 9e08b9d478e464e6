//! Run orchestration - target check, link-set build, reconciliation

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::executor::Reconciler;
use super::outcome::EntryReport;
use super::{Mode, ReconcileResult};
use crate::config::{Config, PatternMatcher};
use crate::error::{Error, Result};
use crate::linkset::{LinkSet, LinkSetBuilder};

/// Main link engine
pub struct LinkEngine {
    builder: LinkSetBuilder,
}

impl LinkEngine {
    /// Create a new link engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configured patterns fail to compile.
    pub fn new(config: &Config) -> Result<Self> {
        // Compile pattern matcher once during construction
        let matcher = PatternMatcher::with_patterns(&config.ignore, &config.include)?;

        Ok(Self {
            builder: LinkSetBuilder::with_matcher(matcher),
        })
    }

    /// Fail if `target_root` exists and is not a directory
    ///
    /// A target that does not exist yet is fine; create makes it on demand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetNotDirectory`] if a non-directory (including a
    /// dangling symlink) occupies the target root.
    pub fn check_target(target_root: &Path) -> Result<()> {
        match fs::metadata(target_root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(Error::TargetNotDirectory(target_root.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if fs::symlink_metadata(target_root).is_ok() {
                    Err(Error::TargetNotDirectory(target_root.to_path_buf()))
                } else {
                    Ok(())
                }
            }
            Err(e) => Err(Error::io("stat", target_root, e)),
        }
    }

    /// Check the target and compute the link set without touching anything
    ///
    /// # Errors
    ///
    /// Returns an error if the target is unusable or a source is missing.
    pub fn plan<P: AsRef<Path>>(&self, target_root: &Path, source_roots: &[P]) -> Result<LinkSet> {
        Self::check_target(target_root)?;
        let link_set = self.builder.build(target_root, source_roots)?;
        debug!(
            "{} descriptors for target {}",
            link_set.len(),
            link_set.target_root().display()
        );
        Ok(link_set)
    }

    /// Execute a run in `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if the target is unusable or a source is missing; in
    /// both cases the target tree is left untouched.
    pub fn run<P: AsRef<Path>>(
        &self,
        target_root: &Path,
        source_roots: &[P],
        mode: Mode,
    ) -> Result<ReconcileResult> {
        self.run_with_observer(target_root, source_roots, mode, |_| {})
    }

    /// Execute a run in `mode`, reporting each entry to `observe` as it is handled
    ///
    /// # Errors
    ///
    /// Returns an error if the target is unusable or a source is missing; in
    /// both cases the target tree is left untouched.
    pub fn run_with_observer<P: AsRef<Path>>(
        &self,
        target_root: &Path,
        source_roots: &[P],
        mode: Mode,
        observe: impl FnMut(&EntryReport),
    ) -> Result<ReconcileResult> {
        let link_set = self.plan(target_root, source_roots)?;
        Ok(Reconciler::new(mode).apply_with(&link_set, observe))
    }
}
