//! SQL DDL for initializing the entry store.

/// SQLite schema: one table, no migrations.
///
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT — monotonically increasing,
///   never reused after deletion
/// - `title` / `text` stored exactly as submitted; escaping happens at
///   render time, not storage time
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    text TEXT NOT NULL
);
"#;
