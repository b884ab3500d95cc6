//! Tests for loading game configuration from disk.

use std::fs;
use tempfile::TempDir;

use strictly_connect_four::{GameConfig, Sign};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_file_overrides_signs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("connect_four.toml");
    fs::write(&path, "first_sign = \"X\"\nsecond_sign = \"O\"\n").expect("Write failed");

    let config = GameConfig::load_or_default(&path).expect("Config should load");
    assert_eq!(*config.first_sign(), Sign::from('X'));
    assert_eq!(*config.second_sign(), Sign::from('O'));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("connect_four.toml");
    fs::write(&path, "first_sign = \"ab\"").expect("Write failed");

    let err = GameConfig::load_or_default(&path).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_duplicate_signs_in_file_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("connect_four.toml");
    fs::write(&path, "first_sign = \"*\"").expect("Write failed");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Both players"));
}
