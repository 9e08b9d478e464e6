//! Core error types for the lnfarm library
//!
//! Only run-level failures live here. Per-entry conditions such as a link
//! pointing somewhere else are reported as [`crate::LinkOutcome`] variants.

use std::io;
use std::path::PathBuf;

/// All fatal error kinds of a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A given source root does not exist.
    #[error("source {0:?} does not exist")]
    SourceNotFound(PathBuf),

    /// The target root exists but is not a directory.
    #[error("target tree {0:?} is not a directory")]
    TargetNotDirectory(PathBuf),

    /// Walking a source root failed part way through.
    #[error("failed to walk source {root:?}")]
    Walk {
        /// Source root being walked
        root: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// Filesystem operation failed on a specific path.
    #[error("{action} {path:?} failed")]
    Io {
        /// Short name of the failed operation
        action: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration file {path:?}: {message}")]
    Config {
        /// Offending configuration file
        path: PathBuf,
        /// Reader or parser message
        message: String,
    },

    /// An ignore pattern failed to compile.
    #[error("invalid ignore pattern '{pattern}'")]
    InvalidPattern {
        /// Pattern as written by the user
        pattern: String,
        /// Underlying glob error
        #[source]
        source: ignore::Error,
    },

    /// Configuration values are semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an [`Error::Io`] for `action` on `path`.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
