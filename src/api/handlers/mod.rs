//! Route handlers organized by concern.

pub mod auth;
pub mod entries;
pub mod pages;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all routes at the root level.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pages::routes())
        .merge(auth::routes())
        .merge(entries::routes())
        .merge(system::routes())
}
