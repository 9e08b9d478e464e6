//! Gitignore-style pattern matching using the ignore crate

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{Error, Result};

/// Pattern matcher for source entry exclusion
///
/// Paths are matched relative to the source root they were found in, which
/// is also their path relative to the target root.
#[derive(Debug, Default)]
pub struct PatternMatcher {
    gitignore: Option<Gitignore>,
}

impl PatternMatcher {
    /// Matcher that includes everything
    #[must_use]
    pub const fn new() -> Self {
        Self { gitignore: None }
    }

    /// Build pattern matcher from ignore and include patterns
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile.
    pub fn with_patterns(ignore_patterns: &[String], include_patterns: &[String]) -> Result<Self> {
        if ignore_patterns.is_empty() && include_patterns.is_empty() {
            return Ok(Self::new());
        }

        let mut builder = GitignoreBuilder::new("");

        for pattern in ignore_patterns {
            builder
                .add_line(None, pattern)
                .map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }

        // Include patterns are negated ignores.
        for pattern in include_patterns {
            builder
                .add_line(None, &format!("!{pattern}"))
                .map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }

        let gitignore = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to compile patterns: {e}")))?;

        Ok(Self {
            gitignore: Some(gitignore),
        })
    }

    /// Check if a relative path should be included based on patterns
    #[must_use]
    pub fn should_include(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore
            .as_ref()
            .is_none_or(|gi| !gi.matched(path, is_dir).is_ignore())
    }
}
