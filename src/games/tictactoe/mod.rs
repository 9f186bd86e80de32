//! Tic-tac-toe with move history and replay.

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod saved;
mod types;

pub use game::{Game, MoveEntry};
pub use position::Position;
pub use saved::{HISTORY_KEY, STEP_KEY, SavedGame};
pub use types::{Board, GameStatus, Player, Square};
