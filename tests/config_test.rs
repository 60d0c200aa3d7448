//! Tests for the TOML config file.

use std::io::Write;
use tictactoe_tui::{MoveOrder, Settings, TuiConfig};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.settings(), Settings::default());
}

#[test]
fn test_file_values_and_overrides() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "move_order = \"descending\"").expect("write");
    writeln!(file, "highlight_winning_line = false").expect("write");

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert!(!config.settings().highlight_winning_line);
    assert_eq!(config.log_file().to_str(), Some("tictactoe.log"));

    let config = config.with_move_order(Some(MoveOrder::Ascending));
    assert_eq!(config.settings().move_order, MoveOrder::Ascending);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "move_order = \"sideways\"").expect("write");

    let err = TuiConfig::from_file(file.path()).expect_err("bad value");
    assert!(err.message.contains("Failed to parse config"));
}
