//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! Files are applied lowest precedence first: global, then project, then the
//! file named on the command line. Both pattern lists are additive, so a more
//! specific file can only add patterns. Because `include` entries are applied
//! after `ignore` entries when matching, a project can still re-include an
//! entry that the global file ignores.

use std::fs;
use std::path::Path;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::{Error, Result};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple config files with precedence rules
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        for path in [&files.global, &files.project, &files.cli]
            .into_iter()
            .flatten()
        {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!("loaded config {}", path.display());

        base.ignore.extend(config.ignore);
        base.include.extend(config.include);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_empty_config() {
        let config = ConfigMerger::merge(&ConfigFiles::default()).unwrap();

        assert!(config.ignore.is_empty());
        assert!(config.include.is_empty());
    }

    #[test]
    fn test_merge_single_config() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.toml");
        fs::write(&config_file, r#"ignore = ["*.tmp", "*.log"]"#).unwrap();

        let files = ConfigFiles {
            project: Some(config_file),
            ..ConfigFiles::default()
        };
        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.ignore, vec!["*.tmp", "*.log"]);
    }

    #[test]
    fn test_merge_arrays_additive_in_precedence_order() {
        let tmp = TempDir::new().unwrap();

        let global = tmp.path().join("global.toml");
        fs::write(&global, r#"ignore = ["*.tmp"]"#).unwrap();

        let project = tmp.path().join("project.toml");
        fs::write(&project, r#"ignore = ["*.log"]"#).unwrap();

        let cli = tmp.path().join("cli.toml");
        fs::write(&cli, r#"include = ["keep.log"]"#).unwrap();

        let files = ConfigFiles {
            cli: Some(cli),
            project: Some(project),
            global: Some(global),
        };
        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.ignore, vec!["*.tmp", "*.log"]);
        assert_eq!(config.include, vec!["keep.log"]);
    }

    #[test]
    fn test_merge_reports_parse_errors_with_path() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "ignore = [").unwrap();

        let files = ConfigFiles {
            cli: Some(broken.clone()),
            ..ConfigFiles::default()
        };
        let err = ConfigMerger::merge(&files).unwrap_err();

        assert!(matches!(err, Error::Config { ref path, .. } if *path == broken));
    }
}
