//! SQLite implementation of the entry store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use super::models::Entry;
use super::schema::SQLITE_INIT;
use crate::config::AppConfig;
use crate::error::AppError;

/// Alias for the connection pool backing the store.
pub type SqlitePool = Pool<Sqlite>;

/// SQLite-backed entry store using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct EntryStore {
    pool: SqlitePool,
}

impl EntryStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating the database file if missing) a pool per the config
    /// and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::Storage(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Initializes the schema by executing the bundled DDL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // sqlx::query runs one statement at a time.
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Returns all entries, most recent first. No pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        sqlx::query_as::<_, Entry>("SELECT id, title, text FROM entries ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Returns entries whose title or body contains `query` as a substring,
    /// most recent first. An empty query matches everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn search_entries(&self, query: &str) -> Result<Vec<Entry>, AppError> {
        let pattern = like_pattern(query);
        sqlx::query_as::<_, Entry>(
            "SELECT id, title, text FROM entries \
             WHERE title LIKE ? ESCAPE '\\' OR text LIKE ? ESCAPE '\\' \
             ORDER BY id DESC",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Inserts a new entry and returns it with its assigned id.
    ///
    /// No validation: empty strings are accepted, content is stored
    /// exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn add_entry(&self, title: &str, text: &str) -> Result<Entry, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO entries (title, text) VALUES (?, ?) RETURNING id",
        )
        .bind(title)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(Entry {
            id,
            title: title.to_string(),
            text: text.to_string(),
        })
    }

    /// Deletes the entry with the given id, returning how many rows matched.
    ///
    /// Deleting a missing id is a no-op that returns 0; callers decide
    /// whether that counts as success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database failure.
    pub async fn delete_entry(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

/// Wraps `query` in `%...%`, escaping LIKE metacharacters so user input
/// can only ever match literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}
