//! # inkpost
//!
//! Minimal single-admin blog and guestbook served over HTTP.
//!
//! One admin (a static credential pair, not a stored user) posts short text
//! entries through a web form; visitors can list and search them. Entries are
//! immutable once posted and can only be deleted. All state lives in a single
//! SQLite table — this service is deliberately plain CRUD glue.
//!
//! ## Architecture
//!
//! ```text
//! Browser
//!     │
//!     ├── HTML pages (api/handlers/pages.rs, auth.rs) ── askama templates
//!     ├── JSON endpoints (api/handlers/entries.rs, system.rs)
//!     │
//!     ├── Session/flash cookies (session.rs, signed)
//!     │
//!     └── EntryStore (persistence/) ── SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
pub mod session;
pub mod templates;
