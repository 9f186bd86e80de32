//! Strictly State library - type-safe persisted component state
//!
//! Small stateful components whose state lives in a durable key/value
//! string store.
//!
//! # Architecture
//!
//! - **Storage**: the [`KeyValueStore`] trait, with in-memory and SQLite backends
//! - **Persisted state**: [`PersistedState`] mirrors a value into one store slot
//! - **Games**: tic-tac-toe with snapshot history and replay ([`Game`], [`SavedGame`])
//! - **Greeting**: a persisted name field ([`Greeting`])
//! - **Remote**: a loading/error panel over an async [`Fetcher`] ([`RemoteResource`])
//!
//! # Example
//!
//! ```
//! use strictly_state::{MemoryStore, PersistedState};
//!
//! # fn example() -> Result<(), strictly_state::StoreError> {
//! let store = MemoryStore::new();
//! let mut name = PersistedState::<String, _>::initialize(store.clone(), "name", String::new())?;
//! name.set("Ada".to_string())?;
//!
//! let reopened = PersistedState::<String, _>::initialize(store, "name", String::new())?;
//! assert_eq!(reopened.get(), "Ada");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod greeting;
mod persisted_state;
mod remote;
mod storage;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Storage
pub use storage::{
    KeyValueStore, MemoryStore, NewSlot, Slot, SqliteStore, StoreError, move_slot,
};

// Crate-level exports - Persisted state
pub use persisted_state::{InitialValue, PersistedState};

// Crate-level exports - Greeting
pub use greeting::{Greeting, NAME_KEY};

// Crate-level exports - Remote resource
pub use remote::{FetchError, FetchStatus, Fetcher, HttpFetcher, RemoteResource, RequestTicket};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, HISTORY_KEY, MoveEntry, Player, Position, STEP_KEY, SavedGame,
    Square,
};
pub use games::tictactoe::{invariants, rules};
