//! History consistency invariant: snapshot shape and step bounds.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: History starts empty, snapshot `n` holds `n` marks, and the
/// step points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let starts_empty = history.first() == Some(&Board::new());
        let counts_match = history
            .iter()
            .enumerate()
            .all(|(n, board)| board.occupied_count() == n);

        starts_empty && counts_match && game.step() < history.len()
    }

    fn description() -> &'static str {
        "History starts empty, grows one mark per snapshot, and contains the step"
    }
}
