//! Persistence layer: the SQLite entry store.
//!
//! A single `entries` table holds every post. The concrete implementation
//! uses `sqlx::SqlitePool` for async SQLite access; every statement is
//! parameterized.

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Entry;
pub use sqlite::EntryStore;
