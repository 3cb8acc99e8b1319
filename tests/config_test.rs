//! Tests for loading engine configuration from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use tictactoe_engine::{DecidedRoundPolicy, EngineConfig, Game, SelectError, Symbol};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_from_file_reads_settings() {
    let file = write_config("starting_symbol = \"cross\"\ndecided_round_policy = \"allow\"\n");
    let config = EngineConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(*config.starting_symbol(), Symbol::Cross);
    assert_eq!(*config.decided_round_policy(), DecidedRoundPolicy::Allow);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = write_config("decided_round_policy = \"allow\"\n");
    let config = EngineConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(*config.starting_symbol(), Symbol::Circle);
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = EngineConfig::from_file(dir.path().join("engine.toml")).expect_err("no such file");
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let file = write_config("decided_round_policy = \"sometimes\"\n");
    let err = EngineConfig::from_file(file.path()).expect_err("bad policy");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_game_from_config() {
    let config = EngineConfig::default();
    let mut game = Game::from_config(&config, ());
    assert_eq!(game.current_player(), Symbol::Circle);
    assert_eq!(game.policy(), DecidedRoundPolicy::Reject);

    for index in [0, 3, 1, 4, 2] {
        game.select(index).expect("index in range");
    }
    assert_eq!(game.select(8), Err(SelectError::RoundAlreadyDecided));
}
