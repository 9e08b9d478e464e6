//! Integration tests for configuration module

use std::fs;
use tempfile::TempDir;

use super::{ConfigFiles, ConfigManager};
use crate::error::Error;

#[test]
fn test_full_config_workflow() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
ignore = [".git/", "*.swp"]
include = ["keep.swp"]
"#,
    )
    .unwrap();

    let files = ConfigFiles {
        cli: Some(config_file),
        ..ConfigFiles::default()
    };
    let config = ConfigManager::load_files(&files).unwrap();

    assert_eq!(config.ignore.len(), 2);
    assert_eq!(config.include.len(), 1);
}

#[test]
fn test_invalid_config_validation() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, r#"ignore = [""]"#).unwrap();

    let files = ConfigFiles {
        cli: Some(config_file),
        ..ConfigFiles::default()
    };
    let result = ConfigManager::load_files(&files);

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_unknown_key_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, "target = \"/tmp/t\"\n").unwrap();

    let files = ConfigFiles {
        project: Some(config_file),
        ..ConfigFiles::default()
    };
    let result = ConfigManager::load_files(&files);

    assert!(matches!(result, Err(Error::Config { .. })));
}
