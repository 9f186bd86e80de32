//! Durable key/value string stores.
//!
//! Components never talk to a concrete backend. They take any
//! [`KeyValueStore`], which lets tests hand them a [`MemoryStore`] while
//! the binary uses a [`SqliteStore`].

mod error;
mod memory;
mod models;
mod schema; // Diesel generated schema - internal use only
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{NewSlot, Slot};
pub use sqlite::SqliteStore;

use tracing::{debug, instrument};

/// A durable store of string slots addressed by string keys.
///
/// Reads and writes are synchronous and each call is assumed atomic.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the slot is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the slot under `key`. Removing an absent slot is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// Moves the raw contents of slot `from` to slot `to`.
///
/// The value is copied as stored, without parsing. Returns `false` and
/// changes nothing if `from` is absent. Moving a slot onto itself leaves
/// it in place.
///
/// # Errors
///
/// Returns [`StoreError`] if the store fails.
#[instrument(skip(store))]
pub fn move_slot<S: KeyValueStore>(store: &S, from: &str, to: &str) -> Result<bool, StoreError> {
    let Some(raw) = store.get(from)? else {
        debug!("Source slot absent");
        return Ok(false);
    };

    if from != to {
        store.set(to, &raw)?;
        store.delete(from)?;
    }
    debug!(len = raw.len(), "Slot moved");
    Ok(true)
}
