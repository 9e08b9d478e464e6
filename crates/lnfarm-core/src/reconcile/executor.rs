//! Per-descriptor filesystem operations

use std::error::Error as _;

use super::outcome::{EntryReport, LinkOutcome};
use super::{Mode, ReconcileResult};
use crate::error::{Error, Result};
use crate::fsops::{self, DirStatus, EntryState};
use crate::linkset::{LinkDescriptor, LinkSet};

/// Applies a link set in one [`Mode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    mode: Mode,
}

impl Reconciler {
    /// Create a reconciler for `mode`
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Apply every descriptor in order, handing each report to `observe` as
    /// soon as it is known
    pub fn apply_with(
        &self,
        link_set: &LinkSet,
        mut observe: impl FnMut(&EntryReport),
    ) -> ReconcileResult {
        let mut result = ReconcileResult::new(self.mode);

        for descriptor in link_set {
            let outcome = match self.mode {
                Mode::Create => Self::create(descriptor),
                Mode::Clean => Self::clean(descriptor),
                Mode::Show => Ok(LinkOutcome::Planned),
            }
            .unwrap_or_else(|e| LinkOutcome::Failed {
                error: render_chain(&e),
            });

            let report = EntryReport {
                target: descriptor.target_path(),
                source: descriptor.source_absolute_path().to_path_buf(),
                outcome,
            };
            observe(&report);
            result.entries.push(report);
        }

        result
    }

    /// Create the link for `descriptor` or verify the one already there
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the link cannot be created.
    pub fn create(descriptor: &LinkDescriptor) -> Result<LinkOutcome> {
        let target = descriptor.target_path();
        let source = descriptor.source_absolute_path();

        let created_dirs = match target.parent() {
            Some(parent) => match fsops::ensure_dir_all(parent, descriptor.target_root())? {
                DirStatus::Ready(created) => created,
                DirStatus::Blocked(path) => return Ok(LinkOutcome::ForeignEntry { path }),
            },
            None => Vec::new(),
        };

        let outcome = match fsops::inspect(&target)? {
            EntryState::Absent => {
                fsops::symlink(source, &target)?;
                LinkOutcome::Created { created_dirs }
            }
            EntryState::Symlink(existing) if existing == source => LinkOutcome::AlreadyLinked,
            EntryState::Symlink(existing) => LinkOutcome::Conflict { existing },
            EntryState::Other => LinkOutcome::ForeignEntry { path: target },
        };

        Ok(outcome)
    }

    /// Remove the link for `descriptor` if it points at the descriptor's source
    ///
    /// After a removal, empty parent directories are pruned up to, but never
    /// including, the target root.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be examined or removed.
    pub fn clean(descriptor: &LinkDescriptor) -> Result<LinkOutcome> {
        let target = descriptor.target_path();
        let source = descriptor.source_absolute_path();

        let outcome = match fsops::inspect(&target)? {
            EntryState::Absent => LinkOutcome::Missing,
            EntryState::Symlink(existing) if existing == source => {
                fsops::remove_link(&target)?;
                let pruned = target
                    .parent()
                    .map(|parent| fsops::prune_empty_dirs(parent, descriptor.target_root()))
                    .unwrap_or_default();
                LinkOutcome::Removed { pruned }
            }
            EntryState::Symlink(existing) => LinkOutcome::NotRemovedForeignLink { existing },
            EntryState::Other => LinkOutcome::NotRemovedForeignFile,
        };

        Ok(outcome)
    }
}

/// Render an error with all of its sources on one line
fn render_chain(error: &Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
