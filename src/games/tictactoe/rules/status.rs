//! Status line computation.

use super::super::{Board, GameStatus, Player, Position};

/// Summarizes a snapshot: the winner if any, a draw if the board is full,
/// otherwise whose move is next.
pub fn compute_status(winner: Option<Player>, board: &Board, next: Player) -> GameStatus {
    match winner {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::Next(next),
    }
}

fn is_full(board: &Board) -> bool {
    board.occupied_count() == Position::ALL.len()
}
