//! Per-entry reconciliation outcomes

use std::path::PathBuf;

/// What happened to one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Link created; lists directories made to hold it, outermost first
    Created {
        /// Directories made by this entry
        created_dirs: Vec<PathBuf>,
    },
    /// Link already present with the right referent
    AlreadyLinked,
    /// A link exists but points elsewhere; left untouched
    Conflict {
        /// Referent of the existing link
        existing: PathBuf,
    },
    /// A non-link entry occupies the link path or one of its parents
    ForeignEntry {
        /// The occupying entry
        path: PathBuf,
    },
    /// Link removed; lists directories pruned afterwards, innermost first
    Removed {
        /// Directories removed after the link
        pruned: Vec<PathBuf>,
    },
    /// Clean found a link pointing elsewhere; left untouched
    NotRemovedForeignLink {
        /// Referent of the existing link
        existing: PathBuf,
    },
    /// Clean found a non-link entry; left untouched
    NotRemovedForeignFile,
    /// Clean found nothing at the link path
    Missing,
    /// Show mode; nothing was inspected
    Planned,
    /// The filesystem operation itself failed
    Failed {
        /// Rendered error chain
        error: String,
    },
}

impl LinkOutcome {
    /// Stable category name, suitable for filtering log output
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::AlreadyLinked => "already-satisfied",
            Self::Conflict { .. } => "conflict-foreign-link",
            Self::ForeignEntry { .. } => "foreign-file",
            Self::Removed { .. } => "removed",
            Self::NotRemovedForeignLink { .. } | Self::NotRemovedForeignFile => "not-removed",
            Self::Missing => "missing",
            Self::Planned => "planned",
            Self::Failed { .. } => "error",
        }
    }

    /// Whether the outcome needs a human to look at it
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(
            self,
            Self::Conflict { .. }
                | Self::ForeignEntry { .. }
                | Self::NotRemovedForeignLink { .. }
                | Self::NotRemovedForeignFile
                | Self::Failed { .. }
        )
    }
}

/// Outcome of one descriptor together with the paths it concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// Absolute path of the link
    pub target: PathBuf,
    /// Absolute path the link points (or should point) to
    pub source: PathBuf,
    /// What happened
    pub outcome: LinkOutcome,
}
