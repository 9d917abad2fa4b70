//! Public HTML pages: entry listing and search.

use askama::Template;
use axum::Router;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum_extra::extract::SignedCookieJar;

use crate::api::dto::SearchParams;
use crate::app_state::AppState;
use crate::error::AppError;
use crate::persistence::Entry;
use crate::session;
use crate::templates::IndexTemplate;

/// `GET /` — Render all entries, most recent first.
///
/// # Errors
///
/// Returns [`AppError`] on storage or rendering failure.
pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let entries = state.store.list_entries().await?;
    render_entries(jar, entries, None)
}

/// `GET /search?query=` — Render entries whose title or body contains the
/// query as a substring. An empty or missing query matches everything.
///
/// # Errors
///
/// Returns [`AppError`] on storage or rendering failure.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let query = params.query.unwrap_or_default();
    let entries = state.store.search_entries(&query).await?;
    let shown = if query.is_empty() { None } else { Some(query) };
    render_entries(jar, entries, shown)
}

/// Renders the entries page, consuming any pending flash message.
fn render_entries(
    jar: SignedCookieJar,
    entries: Vec<Entry>,
    query: Option<String>,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let logged_in = session::is_authenticated(&jar);
    let (jar, flash) = session::take_flash(jar);

    let page = IndexTemplate {
        entries,
        flash,
        logged_in,
        query,
    };
    let html = page.render().map_err(|e| AppError::Render(e.to_string()))?;
    Ok((jar, Html(html)))
}

/// Page routes.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
}
