//! End-to-end route tests driving the full router with `tower::oneshot`
//! against throwaway SQLite databases.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    missing_docs
)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use inkpost::api;
use inkpost::app_state::AppState;
use inkpost::config::AppConfig;
use inkpost::persistence::EntryStore;

/// Builds a router over a fresh temp-file database. The file path is
/// returned so tests can clean up after themselves.
async fn test_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "inkpost-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ));

    let config = AppConfig {
        listen_addr: "127.0.0.1:0".parse().expect("listen addr"),
        database_url: format!("sqlite:{}", db_path.display()),
        database_max_connections: 2,
        database_connect_timeout_secs: 5,
        request_timeout_secs: 30,
        admin_username: "admin".to_string(),
        admin_password: "admin".to_string(),
        session_secret: "integration-test-secret-0123456789abcdef".to_string(),
    };

    let store = EntryStore::connect(&config).await.expect("connect store");
    store.init_schema().await.expect("init schema");
    let state = AppState::new(store, &config);

    (api::build_router().with_state(state), db_path)
}

/// Browser-side cookie jar: absorbs `Set-Cookie` headers and replays them
/// on subsequent requests.
#[derive(Default)]
struct Cookies(HashMap<String, String>);

impl Cookies {
    fn absorb(&mut self, resp: &Response) {
        for value in resp.headers().get_all(header::SET_COOKIE) {
            let Ok(s) = value.to_str() else { continue };
            let Some(pair) = s.split(';').next() else { continue };
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                // Removal cookie.
                self.0.remove(name);
            } else {
                self.0.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn header(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

async fn send(
    app: &Router,
    cookies: &mut Cookies,
    method: &str,
    uri: &str,
    form_body: Option<String>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if !cookies.0.is_empty() {
        builder = builder.header(header::COOKIE, cookies.header());
    }
    let request = match form_body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let resp = app.clone().oneshot(request).await.expect("request failed");
    cookies.absorb(&resp);
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = String::from_utf8(bytes.to_vec()).expect("response body was not utf-8");
    (status, body)
}

async fn get(app: &Router, cookies: &mut Cookies, uri: &str) -> (StatusCode, String) {
    send(app, cookies, "GET", uri, None).await
}

async fn login(
    app: &Router,
    cookies: &mut Cookies,
    username: &str,
    password: &str,
) -> (StatusCode, String) {
    let body = format!("username={}&password={}", urlencode(username), urlencode(password));
    send(app, cookies, "POST", "/login", Some(body)).await
}

async fn add_entry(
    app: &Router,
    cookies: &mut Cookies,
    title: &str,
    text: &str,
) -> (StatusCode, String) {
    let body = format!("title={}&text={}", urlencode(title), urlencode(text));
    send(app, cookies, "POST", "/add", Some(body)).await
}

fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn json_status(body: &str) -> i64 {
    let value: serde_json::Value = serde_json::from_str(body).expect("body was not JSON");
    value
        .get("status")
        .and_then(serde_json::Value::as_i64)
        .expect("missing status field")
}

#[tokio::test]
async fn index_on_empty_database_shows_placeholder() {
    let (app, db) = test_app("empty").await;
    let mut cookies = Cookies::default();

    let (status, body) = get(&app, &mut cookies, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No entries yet. Add some!"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn login_checks_username_before_password() {
    let (app, db) = test_app("login").await;
    let mut cookies = Cookies::default();

    // Wrong username wins even though the password is also wrong.
    let (status, body) = login(&app, &mut cookies, "intruder", "nope").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid username"));

    let (status, body) = login(&app, &mut cookies, "admin", "nope").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid password"));

    let (status, _) = login(&app, &mut cookies, "admin", "admin").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(body.contains("You were logged in"));

    // Flash messages display exactly once.
    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(!body.contains("You were logged in"));

    let (status, _) = get(&app, &mut cookies, "/logout").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(body.contains("You were logged out"));
    assert!(body.contains("log in"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn add_requires_authentication() {
    let (app, db) = test_app("add-auth").await;
    let mut cookies = Cookies::default();

    let (status, body) = add_entry(&app, &mut cookies, "sneaky", "post").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("authentication required"));

    // Nothing was stored.
    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(body.contains("No entries yet. Add some!"));
    assert!(!body.contains("sneaky"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn entries_render_newest_first_with_asymmetric_escaping() {
    let (app, db) = test_app("render").await;
    let mut cookies = Cookies::default();
    login(&app, &mut cookies, "admin", "admin").await;

    let (status, _) =
        add_entry(&app, &mut cookies, "<Hello>", "<strong>HTML</strong> allowed here").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(body.contains("New entry was successfully posted"));
    assert!(!body.contains("No entries yet. Add some!"));
    // Title escaped, body passed through raw.
    assert!(body.contains("&lt;Hello&gt;"));
    assert!(body.contains("<strong>HTML</strong> allowed here"));

    add_entry(&app, &mut cookies, "second post", "later text").await;
    let (_, body) = get(&app, &mut cookies, "/").await;
    let newer = body.find("second post").expect("second post missing");
    let older = body.find("&lt;Hello&gt;").expect("first post missing");
    assert!(newer < older, "entries must list newest first");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn search_returns_only_matching_entries() {
    let (app, db) = test_app("search").await;
    let mut cookies = Cookies::default();
    login(&app, &mut cookies, "admin", "admin").await;

    for (title, text) in [("title1", "text1"), ("title2", "text2"), ("title3", "text3")] {
        add_entry(&app, &mut cookies, title, text).await;
    }

    let (status, body) = get(&app, &mut cookies, "/search?query=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("title3") && body.contains("text3"));
    assert!(!body.contains("title1") && !body.contains("title2"));

    // Empty query matches everything.
    let (_, body) = get(&app, &mut cookies, "/search").await;
    assert!(body.contains("title1") && body.contains("title2") && body.contains("title3"));

    let (_, body) = get(&app, &mut cookies, "/search?query=zzz").await;
    assert!(!body.contains("title1") && !body.contains("title2") && !body.contains("title3"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn delete_reports_success_even_for_missing_rows() {
    let (app, db) = test_app("delete").await;
    let mut cookies = Cookies::default();
    login(&app, &mut cookies, "admin", "admin").await;
    add_entry(&app, &mut cookies, "goner", "soon deleted").await;

    // First entry in a fresh database gets id 1.
    let (status, body) = get(&app, &mut cookies, "/delete/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_status(&body), 1);

    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(!body.contains("goner"));

    // Idempotent: the row is already gone.
    let (status, body) = get(&app, &mut cookies, "/delete/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_status(&body), 1);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn delete_rejects_non_numeric_identifiers() {
    let (app, db) = test_app("delete-bad-id").await;
    let mut cookies = Cookies::default();
    login(&app, &mut cookies, "admin", "admin").await;
    add_entry(&app, &mut cookies, "keeper", "stays put").await;

    let (status, body) = get(&app, &mut cookies, "/delete/1%20OR%201=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_status(&body), 0);

    // The attempt touched nothing.
    let (_, body) = get(&app, &mut cookies, "/").await;
    assert!(body.contains("keeper"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn delete_requires_authentication() {
    let (app, db) = test_app("delete-auth").await;
    let mut cookies = Cookies::default();

    let (status, body) = get(&app, &mut cookies, "/delete/1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json_status(&body), 0);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, db) = test_app("health").await;
    let mut cookies = Cookies::default();

    let (status, body) = get(&app, &mut cookies, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));

    let _ = fs::remove_file(&db);
}
