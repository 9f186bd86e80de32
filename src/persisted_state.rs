//! Values kept in sync with a named slot of a durable store.

use crate::storage::{KeyValueStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Default for a [`PersistedState`] when its slot is absent or unreadable.
///
/// A lazy default is only evaluated when it is actually needed, and at
/// most once.
pub enum InitialValue<T> {
    /// A ready value.
    Value(T),
    /// A producer invoked on first read.
    Lazy(Box<dyn FnOnce() -> T>),
}

impl<T> InitialValue<T> {
    /// Wraps a producer that runs only if the stored slot can't be used.
    pub fn lazy(producer: impl FnOnce() -> T + 'static) -> Self {
        Self::Lazy(Box::new(producer))
    }

    /// Resolves the default, invoking the producer if there is one.
    pub fn resolve(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Lazy(producer) => producer(),
        }
    }
}

impl<T> From<T> for InitialValue<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for InitialValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// An in-memory value mirrored into one slot of a [`KeyValueStore`].
///
/// Once any operation returns, the slot named [`key`](Self::key) holds the
/// JSON serialization of the current value, and no slot under a previous
/// key is left behind.
#[derive(Debug)]
pub struct PersistedState<T, S> {
    store: S,
    key: String,
    value: T,
}

impl<T, S> PersistedState<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Loads the value stored under `key`, falling back to `default`.
    ///
    /// A slot that fails to parse is deleted and replaced by the default.
    /// The slot is written once before returning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails or the value can't be
    /// serialized.
    #[instrument(skip(store, key, default), fields(key = %key.as_ref()))]
    pub fn initialize(
        store: S,
        key: impl AsRef<str>,
        default: impl Into<InitialValue<T>>,
    ) -> Result<Self, StoreError> {
        let key = key.as_ref().to_string();

        let stored = match store.get(&key)? {
            Some(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!("Restored value from slot");
                    Some(value)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unparseable slot");
                    store.delete(&key)?;
                    None
                }
            },
            None => None,
        };

        let value = match stored {
            Some(value) => value,
            None => {
                debug!("Using default value");
                default.into().resolve()
            }
        };

        let state = Self { store, key, value };
        state.sync()?;
        Ok(state)
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the key of the slot this value is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the value and writes it to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails or the value can't be
    /// serialized.
    #[instrument(skip(self, value), fields(key = %self.key))]
    pub fn set(&mut self, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.sync()
    }

    /// Computes a new value from the current one and writes it to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails or the value can't be
    /// serialized.
    #[instrument(skip(self, f), fields(key = %self.key))]
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), StoreError> {
        let next = f(&self.value);
        self.set(next)
    }

    /// Moves the value to the slot named `new_key`.
    ///
    /// The slot under the previous key is deleted before the value is
    /// written under the new one. Rekeying to the current key only
    /// rewrites the slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store fails or the value can't be
    /// serialized.
    #[instrument(skip(self, new_key), fields(from = %self.key, to = %new_key.as_ref()))]
    pub fn rekey(&mut self, new_key: impl AsRef<str>) -> Result<(), StoreError> {
        let new_key = new_key.as_ref();
        if new_key != self.key {
            self.store.delete(&self.key)?;
            info!("Slot moved to new key");
            self.key = new_key.to_string();
        }
        self.sync()
    }

    /// Consumes the state, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Writes the current value under the current key.
    fn sync(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.value)?;
        self.store.set(&self.key, &raw)
    }
}
