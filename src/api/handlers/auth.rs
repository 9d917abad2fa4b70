//! Login and logout handlers for the single admin account.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use axum_extra::extract::SignedCookieJar;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::api::dto::LoginForm;
use crate::app_state::AppState;
use crate::error::AppError;
use crate::session;
use crate::templates::LoginTemplate;

/// `GET /login` — Render the login form, or redirect home when already
/// authenticated.
///
/// # Errors
///
/// Returns [`AppError::Render`] on template failure.
pub async fn login_page(jar: SignedCookieJar) -> Result<Response, AppError> {
    if session::is_authenticated(&jar) {
        return Ok(Redirect::to("/").into_response());
    }
    let (jar, flash) = session::take_flash(jar);
    let html = render_login_form(None, flash)?;
    Ok((jar, html).into_response())
}

/// `POST /login` — Attempt authentication against the configured admin
/// credential pair.
///
/// The username is checked before the password: a wrong username reports
/// "Invalid username" even when the password is also wrong. Both
/// comparisons are constant-time.
///
/// # Errors
///
/// Returns [`AppError::Render`] on template failure.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username_ok: bool = form
        .username
        .as_bytes()
        .ct_eq(state.admin_username.as_bytes())
        .into();
    if !username_ok {
        return Ok(render_login_form(Some("Invalid username"), None)?.into_response());
    }

    let password_ok: bool = form
        .password
        .as_bytes()
        .ct_eq(state.admin_password.as_bytes())
        .into();
    if !password_ok {
        return Ok(render_login_form(Some("Invalid password"), None)?.into_response());
    }

    info!("admin logged in");
    let jar = session::push_flash(session::log_in(jar), "You were logged in");
    Ok((jar, Redirect::to("/")).into_response())
}

/// `GET /logout` — End the session and redirect home.
pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    info!("admin logged out");
    let jar = session::push_flash(session::log_out(jar), "You were logged out");
    (jar, Redirect::to("/"))
}

/// Renders the login form with an optional inline error.
fn render_login_form(error: Option<&str>, flash: Option<String>) -> Result<Html<String>, AppError> {
    let page = LoginTemplate {
        error: error.map(str::to_string),
        flash,
        logged_in: false,
    };
    let html = page.render().map_err(|e| AppError::Render(e.to_string()))?;
    Ok(Html(html))
}

/// Auth routes.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", get(logout))
}
