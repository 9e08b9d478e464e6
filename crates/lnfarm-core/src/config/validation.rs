//! Configuration validation and error reporting

use super::patterns::PatternMatcher;
use super::types::Config;
use crate::error::{Error, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is blank or does not compile.
    pub fn validate(config: &Config) -> Result<()> {
        if config.ignore.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidConfig("ignore pattern cannot be empty".into()));
        }

        if config.include.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidConfig("include pattern cannot be empty".into()));
        }

        PatternMatcher::with_patterns(&config.ignore, &config.include)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_blank_ignore_pattern() {
        let config = Config {
            ignore: vec!["  ".to_string()],
            ..Config::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("ignore pattern cannot be empty"));
    }

    #[test]
    fn test_validate_blank_include_pattern() {
        let config = Config {
            include: vec![String::new()],
            ..Config::default()
        };

        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_validate_bad_glob() {
        let config = Config {
            ignore: vec!["foo[".to_string()],
            ..Config::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "foo["));
    }
}
