//! Entry mutation handlers: add and delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::SignedCookieJar;
use tracing::{info, warn};

use crate::api::dto::{AddEntryForm, DeleteResponse};
use crate::app_state::AppState;
use crate::error::AppError;
use crate::session;

/// `POST /add` — Post a new entry. Requires a logged-in session.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] for anonymous visitors and
/// [`AppError::Storage`] on database failure.
pub async fn add_entry(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<AddEntryForm>,
) -> Result<impl IntoResponse, AppError> {
    if !session::is_authenticated(&jar) {
        return Err(AppError::Unauthorized);
    }

    let entry = state.store.add_entry(&form.title, &form.text).await?;
    info!(id = entry.id, "entry posted");

    let jar = session::push_flash(jar, "New entry was successfully posted");
    Ok((jar, Redirect::to("/")))
}

/// `GET /delete/{id}` — Delete an entry by id. Requires a logged-in session.
///
/// Always answers with a `{"status": 0|1, "message": ...}` body. Deleting an
/// id with no matching row still reports success; only a storage failure
/// reports status 0 with the error's description. The id is parsed before
/// any SQL runs, so a non-numeric path segment can never reach the database.
#[utoipa::path(
    get,
    path = "/delete/{id}",
    tag = "Entries",
    summary = "Delete an entry",
    description = "Removes the entry with the given id. Idempotent: a missing id still reports success.",
    params(
        ("id" = String, Path, description = "Entry identifier (decimal integer)"),
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Non-numeric identifier", body = DeleteResponse),
        (status = 401, description = "No admin session", body = DeleteResponse),
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(raw_id): Path<String>,
) -> Response {
    if !session::is_authenticated(&jar) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(DeleteResponse::failure("authentication required")),
        )
            .into_response();
    }

    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(DeleteResponse::failure(format!(
                    "invalid entry id: {raw_id}"
                ))),
            )
                .into_response();
        }
    };

    match state.store.delete_entry(id).await {
        Ok(rows) => {
            info!(id, rows, "entry deleted");
            Json(DeleteResponse::success("Entry deleted")).into_response()
        }
        Err(e) => {
            warn!(id, error = %e, "entry delete failed");
            Json(DeleteResponse::failure(e.to_string())).into_response()
        }
    }
}

/// Entry mutation routes.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_entry))
        .route("/delete/{id}", get(delete_entry))
}
