//! Configuration file parsing, merging, and pattern matching
//!
//! This module handles:
//! - Config file discovery (CLI flag, project file, global XDG file)
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Gitignore-style pattern matching for source entries
//! - Validation and error reporting

mod discovery;
mod merge;
mod patterns;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use patterns::PatternMatcher;
pub use types::Config;
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all discovered sources
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is unreadable, malformed, or
    /// contains invalid patterns.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        let config_files = ConfigDiscovery::discover(cli_config_path);
        Self::load_files(&config_files)
    }

    /// Merge and validate an explicit set of config files
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is unreadable, malformed, or
    /// contains invalid patterns.
    pub fn load_files(files: &ConfigFiles) -> Result<Config> {
        let merged = ConfigMerger::merge(files)?;
        ConfigValidator::validate(&merged)?;
        Ok(merged)
    }
}
