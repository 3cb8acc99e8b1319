//! Shared helpers for integration tests.

#![allow(dead_code)]

use tictactoe_engine::{Board, Square, Symbol};
use tracing_subscriber::EnvFilter;

/// Installs a log subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses the text board form: `X`, `O` and `.` cells; whitespace and `/`
/// are ignored. Other characters are a fixture bug.
pub fn cells(text: &str) -> Vec<Square> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .map(|c| match c {
            'X' => Square::Occupied(Symbol::Cross),
            'O' => Square::Occupied(Symbol::Circle),
            '.' => Square::Empty,
            other => panic!("unexpected board character {:?}", other),
        })
        .collect()
}

/// Renders a board the way the text fixtures are written.
pub fn render(board: &Board) -> String {
    board.to_string()
}

pub const EMPTY_BOARD: &str = ". . .\n. . .\n. . .";
