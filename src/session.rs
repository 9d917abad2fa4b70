//! Signed-cookie session and flash message handling.
//!
//! The auth gate has exactly two states: anonymous and authenticated. The
//! "logged in" flag lives in a signed browser-session cookie, so there is no
//! server-side session store and nothing to expire beyond cookie semantics.
//! Flash messages ride a second signed cookie and are deleted the first time
//! a page renders them.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie carrying the logged-in flag.
pub const SESSION_COOKIE: &str = "inkpost_session";

/// Name of the one-time flash message cookie.
pub const FLASH_COOKIE: &str = "inkpost_flash";

/// Value stored in the session cookie for an authenticated admin.
const LOGGED_IN: &str = "logged_in";

/// Returns whether the jar carries a valid logged-in session.
///
/// A cookie with a bad signature never reaches us; `SignedCookieJar`
/// drops it during extraction.
#[must_use]
pub fn is_authenticated(jar: &SignedCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|c| c.value() == LOGGED_IN)
}

/// Transitions the session to authenticated.
#[must_use]
pub fn log_in(jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(build_cookie(SESSION_COOKIE, LOGGED_IN.to_string()))
}

/// Transitions the session back to anonymous.
#[must_use]
pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(removal_cookie(SESSION_COOKIE))
}

/// Stores a one-time message to display on the next rendered page.
#[must_use]
pub fn push_flash(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    jar.add(build_cookie(FLASH_COOKIE, message.to_string()))
}

/// Takes the pending flash message, if any, clearing it from the jar.
#[must_use]
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned());
    let jar = if message.is_some() {
        jar.remove(removal_cookie(FLASH_COOKIE))
    } else {
        jar
    };
    (jar, message)
}

/// Builds a session-scoped cookie. No `max_age`: the browser drops it when
/// the session ends.
fn build_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Removal cookie with attributes matching [`build_cookie`], so the browser
/// deletes the right one.
fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
