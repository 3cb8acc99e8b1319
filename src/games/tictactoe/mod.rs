mod board;
mod error;
mod game;
pub mod invariants;
mod observer;
mod outcome;
mod player;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{ResumeError, SelectError};
pub use game::Game;
pub use observer::{GameEvent, GameObserver};
pub use outcome::Outcome;
pub use player::Player;
pub use position::Position;
pub use types::{Square, Symbol};
