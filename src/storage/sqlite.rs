//! SQLite-backed durable store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use super::{KeyValueStore, NewSlot, Slot, StoreError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key/value store persisted in a SQLite database file.
///
/// Each operation opens its own connection, so `":memory:"` does not
/// persist between calls. Use a file path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StoreError> {
        info!(path = %db_path, "Opening SqliteStore");
        let store = Self { db_path };

        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        Ok(store)
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Lists all stored slots, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_slots(&self) -> Result<Vec<Slot>, StoreError> {
        let mut conn = self.connection()?;

        let slots = schema::slots::table
            .order(schema::slots::key.asc())
            .select(Slot::as_select())
            .load(&mut conn)?;

        debug!(count = slots.len(), "Slots loaded");
        Ok(slots)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| {
                StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
            })
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection()?;

        let value = schema::slots::table
            .find(key)
            .select(schema::slots::value)
            .first::<String>(&mut conn)
            .optional()?;

        debug!(found = value.is_some(), "Read slot");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection()?;

        diesel::replace_into(schema::slots::table)
            .values(&NewSlot::new(key.to_string(), value.to_string()))
            .execute(&mut conn)?;

        debug!("Wrote slot");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection()?;

        let removed = diesel::delete(schema::slots::table.find(key)).execute(&mut conn)?;

        debug!(removed, "Deleted slot");
        Ok(())
    }
}
