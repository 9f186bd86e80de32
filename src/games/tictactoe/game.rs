//! Tic-tac-toe engine with replayable snapshot history.

use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::rules::{check_winner, compute_status, next_player};
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Keeps every board snapshot since the start of the game and a `step`
/// pointing at the one being displayed. Selecting a square while looking
/// at an earlier snapshot discards the snapshots after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

impl Game {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Rebuilds a game from a stored history and step.
    ///
    /// # Errors
    ///
    /// Returns the violated invariants if the parts could not have been
    /// produced by play.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_parts(history: Vec<Board>, step: usize) -> Result<Self, Vec<InvariantViolation>> {
        let game = Self::from_parts_unchecked(history, step);
        TicTacToeInvariants::check_all(&game)?;
        Ok(game)
    }

    pub(crate) fn from_parts_unchecked(history: Vec<Board>, step: usize) -> Self {
        Self { history, step }
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the winner of the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Returns whose turn it is on the displayed snapshot.
    pub fn next_player(&self) -> Player {
        next_player(self.current())
    }

    /// Returns the status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current();
        compute_status(check_winner(board), board, next_player(board))
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Snapshots after the current step are discarded before the new one
    /// is appended. Returns `false` and changes nothing if the displayed
    /// board already has a winner or the square is taken.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn select_square(&mut self, pos: Position) -> bool {
        let board = self.current();

        if let Some(winner) = check_winner(board) {
            debug!(%winner, "Ignoring move on decided board");
            return false;
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move on occupied square");
            return false;
        }

        let player = next_player(board);
        let mut next = board.clone();
        next.set(pos, Square::Occupied(player));

        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        debug_assert!(TicTacToeInvariants::check_all(self).is_ok());
        info!(%player, position = %pos, step = self.step, "Move applied");
        true
    }

    /// Places the next player's mark at a raw board index (0-8).
    ///
    /// Out-of-range indices are ignored like any other rejected move.
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(pos) => self.select_square(pos),
            None => {
                debug!("Ignoring out-of-range index");
                false
            }
        }
    }

    /// Displays snapshot `step` without changing the history.
    ///
    /// Returns `false` and keeps the current step if `step` is past the end.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            warn!(len = self.history.len(), "Ignoring jump past end of history");
            return false;
        }
        self.step = step;
        true
    }

    /// Resets to a single empty snapshot.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len().saturating_sub(1), "Restarting game");
        *self = Self::new();
    }

    /// Lists one entry per snapshot for a move picker.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry {
                step,
                current: step == self.step,
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot the player can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Index into the history.
    pub step: usize,
    /// Whether this is the displayed snapshot.
    pub current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.step == 0 {
            write!(f, "Go to game start")?;
        } else {
            write!(f, "Go to move #{}", self.step)?;
        }
        if self.current {
            write!(f, " (current)")?;
        }
        Ok(())
    }
}
