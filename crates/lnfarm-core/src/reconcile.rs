//! Reconciliation of a link set against the live filesystem
//!
//! Three modes share one descriptor sequence:
//! - [`Mode::Create`] makes missing links and verifies existing ones
//! - [`Mode::Clean`] removes links this set would have made, pruning
//!   directories left empty
//! - [`Mode::Show`] reports the plan without touching anything
//!
//! Descriptors are applied strictly in order. Per-entry conditions never
//! abort a run; they are collected as [`LinkOutcome`]s.

mod executor;
mod orchestrator;
mod outcome;
mod reporting;


use std::fmt;
use std::path::PathBuf;

pub use executor::Reconciler;
pub use orchestrator::LinkEngine;
pub use outcome::{EntryReport, LinkOutcome};
pub use reporting::ReconcileReporter;

/// Reconciliation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Create missing links (default)
    #[default]
    Create,
    /// Remove links and prune emptied directories
    Clean,
    /// Report the link set only
    Show,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Clean => f.write_str("clean"),
            Self::Show => f.write_str("show"),
        }
    }
}

/// Per-entry results of one reconciliation run, in descriptor order
#[derive(Debug, Clone, Default)]
pub struct ReconcileResult {
    /// Mode the run was performed in
    pub mode: Mode,
    /// One report per descriptor
    pub entries: Vec<EntryReport>,
}

impl ReconcileResult {
    /// Empty result for `mode`
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    fn count(&self, predicate: impl Fn(&LinkOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.outcome)).count()
    }

    /// Links created
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, LinkOutcome::Created { .. }))
    }

    /// Links that were already correct
    #[must_use]
    pub fn already_linked(&self) -> usize {
        self.count(|o| matches!(o, LinkOutcome::AlreadyLinked))
    }

    /// Links removed
    #[must_use]
    pub fn removed(&self) -> usize {
        self.count(|o| matches!(o, LinkOutcome::Removed { .. }))
    }

    /// Entries with nothing to remove
    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, LinkOutcome::Missing))
    }

    /// Entries reported for show mode
    #[must_use]
    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, LinkOutcome::Planned))
    }

    /// Links found pointing somewhere else
    #[must_use]
    pub fn conflicts(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                LinkOutcome::Conflict { .. } | LinkOutcome::NotRemovedForeignLink { .. }
            )
        })
    }

    /// Non-link entries occupying a managed path
    #[must_use]
    pub fn foreign(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                LinkOutcome::ForeignEntry { .. } | LinkOutcome::NotRemovedForeignFile
            )
        })
    }

    /// Directories pruned during clean
    #[must_use]
    pub fn pruned_dirs(&self) -> Vec<&PathBuf> {
        self.entries
            .iter()
            .filter_map(|e| match &e.outcome {
                LinkOutcome::Removed { pruned } => Some(pruned),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Entries whose filesystem operation failed
    pub fn failures(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, LinkOutcome::Failed { .. }))
    }

    /// Whether every entry was handled without an I/O failure
    ///
    /// Conflicts and foreign entries are reported outcomes, not failures.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}
