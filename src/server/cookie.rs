//! Session cookie handling

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::session::SessionId;

pub const COOKIE_NAME: &str = "todo_session";

/// Session id carried by the request's cookies, if any parses.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name.trim() == COOKIE_NAME {
                SessionId::parse(value)
            } else {
                None
            }
        })
        .next()
}

/// The request's session, or a fresh id plus the `Set-Cookie` value that
/// hands it to the browser.
pub fn resolve(headers: &HeaderMap) -> (SessionId, Option<String>) {
    match session_from_headers(headers) {
        Some(id) => (id, None),
        None => {
            let id = SessionId::new();
            (id, Some(set_cookie_value(id)))
        }
    }
}

pub fn set_cookie_value(id: SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", COOKIE_NAME, id)
}

pub fn with_cookie(set_cookie: Option<String>, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Some(cookie) = set_cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("invalid session cookie header: {}", e),
        }
    }
    response
}
