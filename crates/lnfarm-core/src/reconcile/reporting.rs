//! Reconciliation reporting and statistics
//!
//! The reconciler only produces outcomes. This module decides how loud each
//! one is and how a finished run is summarized.

use std::fmt::Write;

use tracing::{debug, error, info};

use super::outcome::{EntryReport, LinkOutcome};
use super::{Mode, ReconcileResult};

/// Reconciliation reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileReporter {
    verbose: bool,
}

impl ReconcileReporter {
    /// Create a new reporter
    ///
    /// With `verbose`, already-satisfied and missing entries are logged at
    /// info level instead of debug.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Log one entry with its category attached
    pub fn log_entry(&self, report: &EntryReport) {
        let target = report.target.display();
        let source = report.source.display();
        let category = report.outcome.category();

        match &report.outcome {
            LinkOutcome::Created { created_dirs } => {
                for dir in created_dirs {
                    info!(category = "directory-created", "mkdir {}", dir.display());
                }
                info!(category, "link {target} -> {source}");
            }
            LinkOutcome::AlreadyLinked => {
                if self.verbose {
                    info!(category, "link {target} -> {source} already exists");
                } else {
                    debug!(category, "link {target} -> {source} already exists");
                }
            }
            LinkOutcome::Conflict { existing } => info!(
                category,
                "target {target} links to {} instead of {source}",
                existing.display()
            ),
            LinkOutcome::ForeignEntry { path } => {
                info!(category, "non-link entry {} already exists", path.display());
            }
            LinkOutcome::Removed { pruned } => {
                info!(category, "unlink {target}");
                for dir in pruned {
                    info!(category = "directory-pruned", "rmdir {}", dir.display());
                }
            }
            LinkOutcome::NotRemovedForeignLink { existing } => info!(
                category,
                "target {target} links to {} instead of {source}, not removed",
                existing.display()
            ),
            LinkOutcome::NotRemovedForeignFile => {
                info!(category, "non-link entry {target}, not removed");
            }
            LinkOutcome::Missing => {
                if self.verbose {
                    info!(category, "no link at {target}");
                } else {
                    debug!(category, "no link at {target}");
                }
            }
            LinkOutcome::Planned => debug!(category, "link {target} -> {source}"),
            LinkOutcome::Failed { error } => error!(category, "{target}: {error}"),
        }
    }

    /// One `target -> source` line for show mode
    #[must_use]
    pub fn plan_line(report: &EntryReport) -> String {
        format!("{} -> {}", report.target.display(), report.source.display())
    }

    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &ReconcileResult) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n=== {} summary ===", capitalize(result.mode));
        match result.mode {
            Mode::Create => {
                let _ = writeln!(output, "Created:   {}", result.created());
                let _ = writeln!(output, "Satisfied: {}", result.already_linked());
            }
            Mode::Clean => {
                let _ = writeln!(output, "Removed:   {}", result.removed());
                let _ = writeln!(output, "Pruned:    {}", result.pruned_dirs().len());
                let _ = writeln!(output, "Missing:   {}", result.missing());
            }
            Mode::Show => {
                let _ = writeln!(output, "Planned:   {}", result.planned());
            }
        }
        let _ = writeln!(output, "Conflicts: {}", result.conflicts());
        let _ = writeln!(output, "Foreign:   {}", result.foreign());

        let failures: Vec<_> = result.failures().collect();
        if !failures.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", failures.len());
            for report in failures {
                if let LinkOutcome::Failed { error } = &report.outcome {
                    let _ = writeln!(output, "  - {}: {error}", report.target.display());
                }
            }
        }

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}

fn capitalize(mode: Mode) -> &'static str {
    match mode {
        Mode::Create => "Create",
        Mode::Clean => "Clean",
        Mode::Show => "Show",
    }
}
