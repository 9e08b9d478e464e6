//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// ```toml
/// ignore = [".git/", "*.swp"]
/// include = ["keep.swp"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gitignore-style patterns of source entries to leave out of the link set
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Patterns that re-include entries matched by `ignore`
    #[serde(default)]
    pub include: Vec<String>,
}

impl Config {
    /// Whether any filtering pattern is configured
    #[must_use]
    pub fn has_patterns(&self) -> bool {
        !self.ignore.is_empty() || !self.include.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.ignore.is_empty());
        assert!(config.include.is_empty());
        assert!(!config.has_patterns());
    }

    #[test]
    fn test_config_parse() {
        let config: Config = toml::from_str(
            r#"
ignore = [".git/", "*.swp"]
include = ["keep.swp"]
"#,
        )
        .unwrap();

        assert_eq!(config.ignore, vec![".git/", "*.swp"]);
        assert_eq!(config.include, vec!["keep.swp"]);
        assert!(config.has_patterns());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result = toml::from_str::<Config>("follow_symlinks = true");
        assert!(result.is_err());
    }
}
