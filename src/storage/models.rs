//! Database models for stored slots.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::storage::schema;

/// A stored slot row.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::slots)]
pub struct Slot {
    /// Slot key.
    key: String,
    /// Serialized value.
    value: String,
    /// Time of the last write.
    updated_at: NaiveDateTime,
}

/// Insertable slot model for writing a value under a key.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::slots)]
pub struct NewSlot {
    /// Slot key.
    key: String,
    /// Serialized value.
    value: String,
}
