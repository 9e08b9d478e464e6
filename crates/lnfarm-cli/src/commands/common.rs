//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use anyhow::Context;
use lnfarm_core::{Config, ConfigManager, LinkEngine};
use tracing::{debug, warn};

/// Execution options shared by every mode
pub struct RunOptions<'a> {
    /// Target tree root
    pub target: &'a Path,
    /// Source roots in application order
    pub sources: &'a [PathBuf],
    /// Report already-satisfied and missing entries at info level
    pub verbose: bool,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}

impl RunOptions<'_> {
    /// Load configuration and build the engine for this run
    pub fn engine(&self) -> anyhow::Result<LinkEngine> {
        let config = self.load_config()?;
        if config.has_patterns() {
            debug!(
                "{} ignore and {} include patterns active",
                config.ignore.len(),
                config.include.len()
            );
        } else {
            debug!("no ignore patterns, linking every entry");
        }
        LinkEngine::new(&config).context("Failed to initialize link engine")
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        if self.no_config {
            return Ok(Config::default());
        }
        if let Some(path) = self.config_path.filter(|p| !p.is_file()) {
            warn!("config file {} not found, ignoring", path.display());
        }
        ConfigManager::load(self.config_path).context("Failed to load configuration")
    }
}
