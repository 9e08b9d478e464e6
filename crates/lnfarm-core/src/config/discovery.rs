//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const PROJECT_CONFIG_NAME: &str = ".lnfarm.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (`.lnfarm.toml`)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// A CLI path that does not exist is dropped rather than treated as an error.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        let cli = cli_path.filter(|p| p.is_file()).map(Path::to_path_buf);

        let project = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::find_upwards(&cwd, PROJECT_CONFIG_NAME));
        let global = Self::find_global_config();

        ConfigFiles {
            cli,
            project,
            global,
        }
    }

    /// Find `name` in `start` or the closest ancestor that has it
    #[must_use]
    pub fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("lnfarm").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
