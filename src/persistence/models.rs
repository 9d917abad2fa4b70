//! Database models for stored entries.

use serde::{Deserialize, Serialize};

/// A stored post row from the `entries` table.
///
/// Entries are immutable once created; there is no edit operation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entry {
    /// Auto-increment row ID, assigned by the store on creation.
    pub id: i64,
    /// Post title. Escaped at render time.
    pub title: String,
    /// Post body. Rendered without escaping, so embedded markup shows up
    /// as markup.
    pub text: String,
}
