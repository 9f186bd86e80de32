//! Turn order for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is on this board.
///
/// X always moves first, so an even number of marks means X is next.
#[instrument(skip(board))]
pub fn next_player(board: &Board) -> Player {
    if board.occupied_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
