//! Tests for loading evaluator configuration from disk.

use std::io::Write;
use strictly_boards::{CliConfig, OutputFormat};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"").unwrap();
    writeln!(file, "log_filter = \"strictly_boards=debug\"").unwrap();

    let config = CliConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert_eq!(config.log_filter(), "strictly_boards=debug");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CliConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = [").unwrap();

    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
