//! Tic-tac-toe game persisted across sessions.

use super::types::Board;
use super::{Game, Position};
use crate::persisted_state::{InitialValue, PersistedState};
use crate::storage::{KeyValueStore, StoreError};
use tracing::{info, instrument, warn};

/// Slot holding the snapshot history.
pub const HISTORY_KEY: &str = "squares:history";

/// Slot holding the displayed step.
pub const STEP_KEY: &str = "squares:step";

/// A [`Game`] whose history and step live in two store slots.
///
/// Every change is written through before the call returns, so reopening
/// from the same store resumes exactly where play stopped.
#[derive(Debug)]
pub struct SavedGame<S> {
    game: Game,
    history: PersistedState<Vec<Board>, S>,
    step: PersistedState<usize, S>,
}

impl<S: KeyValueStore + Clone> SavedGame<S> {
    /// Opens the saved game in `store`, starting fresh if none exists.
    ///
    /// A stored history and step that could not have come from play are
    /// discarded and replaced by a new game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Result<Self, StoreError> {
        let history = PersistedState::<Vec<Board>, _>::initialize(
            store.clone(),
            HISTORY_KEY,
            InitialValue::lazy(|| vec![Board::new()]),
        )?;
        let step = PersistedState::<usize, _>::initialize(store, STEP_KEY, 0usize)?;

        let game = match Game::from_parts(history.get().clone(), *step.get()) {
            Ok(game) => game,
            Err(violations) => {
                warn!(?violations, "Stored game is inconsistent, starting over");
                Game::new()
            }
        };

        let mut saved = Self {
            game,
            history,
            step,
        };
        saved.save_history()?;
        saved.save_step()?;
        info!(
            step = saved.game.step(),
            len = saved.game.history().len(),
            "Saved game opened"
        );
        Ok(saved)
    }

    /// Returns the engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Places the next mark at `pos`, persisting the result.
    ///
    /// Returns `false` if the move was rejected; nothing is written then.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(self))]
    pub fn select_square(&mut self, pos: Position) -> Result<bool, StoreError> {
        if !self.game.select_square(pos) {
            return Ok(false);
        }
        self.save_history()?;
        self.save_step()?;
        Ok(true)
    }

    /// Places the next mark at a raw board index, persisting the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> Result<bool, StoreError> {
        match Position::from_index(index) {
            Some(pos) => self.select_square(pos),
            None => Ok(self.game.select_index(index)),
        }
    }

    /// Displays snapshot `step`, persisting only the step.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<bool, StoreError> {
        if !self.game.jump_to(step) {
            return Ok(false);
        }
        self.save_step()?;
        Ok(true)
    }

    /// Starts over, persisting the empty game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), StoreError> {
        self.game.restart();
        self.save_step()?;
        self.save_history()
    }

    fn save_history(&mut self) -> Result<(), StoreError> {
        if self.history.get().as_slice() != self.game.history() {
            self.history.set(self.game.history().to_vec())?;
        }
        Ok(())
    }

    fn save_step(&mut self) -> Result<(), StoreError> {
        if *self.step.get() != self.game.step() {
            self.step.set(self.game.step())?;
        }
        Ok(())
    }
}
