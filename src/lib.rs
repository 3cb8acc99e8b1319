//! Tic-tac-toe rule engine.
//!
//! Tracks the 3x3 board, enforces turn order and single occupancy, detects
//! wins and draws, keeps per-player scores across rounds, and can resume a
//! game from a supplied mid-game position after checking it is reachable.
//!
//! # Architecture
//!
//! - **Board**: owns the 9 squares; answers occupancy queries
//! - **Rules**: pure win, draw and resume checks over a board
//! - **Game**: turn order, scoring, rounds; reports to a [`GameObserver`]
//! - **Config**: starting symbol and decided-round policy from TOML
//!
//! Rendering, input and opponents live outside this crate and drive it
//! through [`Game::select`], the query methods, and the observer.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameEvent, Outcome, Square, Symbol};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use Symbol::{Circle as O, Cross as X};
//! let cells: [Square; 9] = [
//!     O.into(), O.into(), X.into(),
//!     X.into(), X.into(), O.into(),
//!     O.into(), X.into(), Square::Empty,
//! ];
//! let mut game = Game::resume_with_observer(&cells, X, Vec::<GameEvent>::new())?;
//! game.select(8)?;
//! assert_eq!(game.round_outcome(), Some(Outcome::Draw));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DecidedRoundPolicy, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameEvent, GameObserver, Outcome, Player, Position, ResumeError, SelectError,
    Square, Symbol, invariants, rules,
};
