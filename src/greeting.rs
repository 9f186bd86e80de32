//! A name field that survives restarts.

use crate::persisted_state::PersistedState;
use crate::storage::{KeyValueStore, StoreError};
use tracing::{debug, instrument};

/// Slot holding the greeted name.
pub const NAME_KEY: &str = "name";

/// Greeting form backed by the `name` slot.
#[derive(Debug)]
pub struct Greeting<S> {
    name: PersistedState<String, S>,
}

impl<S: KeyValueStore> Greeting<S> {
    /// Opens the greeting, using `initial_name` if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(store))]
    pub fn open(store: S, initial_name: &str) -> Result<Self, StoreError> {
        let name =
            PersistedState::<String, _>::initialize(store, NAME_KEY, initial_name.to_string())?;
        Ok(Self { name })
    }

    /// Returns the current name.
    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Replaces the name and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails.
    #[instrument(skip(self))]
    pub fn set_name(&mut self, name: &str) -> Result<(), StoreError> {
        debug!("Updating name");
        self.name.set(name.to_string())
    }

    /// Renders the greeting line.
    pub fn message(&self) -> String {
        if self.name().is_empty() {
            "Please type your name".to_string()
        } else {
            format!("Hello {}", self.name())
        }
    }
}
