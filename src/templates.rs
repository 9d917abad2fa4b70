//! Askama templates for the HTML pages.
//!
//! Interpolations are escaped by default; only the entry body opts out via
//! the `|safe` filter in `index.html`, which is the intentional asymmetric
//! rendering policy (titles escaped, bodies raw).

use askama::Template;

use crate::persistence::Entry;

/// Entries page template, used for both `/` and `/search`.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Entries to display, newest first.
    pub entries: Vec<Entry>,
    /// One-time message consumed from the flash cookie, if any.
    pub flash: Option<String>,
    /// Whether the current visitor holds an admin session.
    pub logged_in: bool,
    /// The search query being displayed, when rendering `/search`.
    pub query: Option<String>,
}

/// Login page template.
#[derive(Debug, Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Inline form error ("Invalid username" / "Invalid password").
    pub error: Option<String>,
    /// One-time message consumed from the flash cookie, if any.
    pub flash: Option<String>,
    /// Whether the current visitor holds an admin session.
    pub logged_in: bool,
}
