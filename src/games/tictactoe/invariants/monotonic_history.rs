//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::rules::check_winner;
use super::super::{Game, Position, Square};
use super::Invariant;

/// Invariant: Each snapshot extends the previous one by a single mark.
///
/// No square is ever overwritten or cleared, and nothing is appended
/// after a snapshot that already has a winner.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);

            if check_winner(before).is_some() {
                return false;
            }

            let mut added = 0;
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    (b, a) if b == a => {}
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an undecided board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicHistoryInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.select_square(pos);
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut first = Board::new();
        first.set(Position::Center, Square::Occupied(Player::X));
        let mut second = Board::new();
        second.set(Position::Center, Square::Occupied(Player::O));
        second.set(Position::TopLeft, Square::Occupied(Player::X));

        let game = Game::from_parts_unchecked(vec![Board::new(), first, second], 2);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));

        let game = Game::from_parts_unchecked(vec![Board::new(), board], 1);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
