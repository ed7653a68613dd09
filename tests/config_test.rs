//! Tests for TOML configuration loading.

use std::io::Write;
use std::time::Duration;
use strictly_match::MatchConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = MatchConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(*config.history_limit(), 10);
    assert_eq!(config.tick(), Duration::from_millis(100));
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_limit = 3").unwrap();
    writeln!(file, "log_filter = \"strictly_tictactoe=debug\"").unwrap();

    let config = MatchConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.history_limit(), 3);
    assert_eq!(config.log_filter(), "strictly_tictactoe=debug");
    assert_eq!(*config.tick_ms(), 100);
    assert_eq!(
        config.log_file(),
        &std::path::PathBuf::from("strictly_match.log")
    );
}

#[test]
fn test_invalid_toml_is_rejected() {
    let err = MatchConfig::from_toml("history_limit = \"lots\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_is_rejected() {
    let err = MatchConfig::from_toml("tick_ms = 0").unwrap_err();
    assert!(err.to_string().contains("tick_ms"));
}

#[test]
fn test_zero_history_limit_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_limit = 0").unwrap();

    let err = MatchConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("history_limit"));
}
