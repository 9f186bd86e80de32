//! Alternating turn invariant: marks are added X, O, X, O, ...

use super::super::rules::next_player;
use super::super::{Game, Position, Square};
use super::Invariant;

/// Invariant: Each snapshot adds the mark of the player whose turn it was.
///
/// The first mark is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let expected = Square::Occupied(next_player(before));

            Position::ALL
                .iter()
                .filter(|pos| before.get(**pos) != after.get(**pos))
                .all(|pos| after.get(*pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
