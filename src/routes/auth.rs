//! Token check for every `/api` route.
//!
//! The browser gate stores the token in the `auth_token` cookie; scripts and
//! webhook senders may pass `?token=` instead. The cookie wins when both are
//! present. An empty token never authenticates.

use std::collections::HashMap;

use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::state::AppState;

const TOKEN_QUERY_PARAM: &str = "token";

/// Middleware: reject with 401 unless the request carries the expected token.
pub async fn require_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match request_token(&jar, &query) {
        Some(token) if token_matches(token, &state.expected_token) => Ok(next.run(request).await),
        presented => {
            tracing::warn!(
                path = %request.uri().path(),
                token_present = presented.is_some(),
                "rejected unauthenticated api request"
            );
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Token presented by the request: cookie first, then query parameter.
pub(crate) fn request_token<'a>(jar: &'a CookieJar, query: &'a HashMap<String, String>) -> Option<&'a str> {
    jar.get(gate::TOKEN_COOKIE)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
        .or_else(|| query.get(TOKEN_QUERY_PARAM).map(String::as_str))
        .filter(|t| !t.is_empty())
}

pub(crate) fn token_matches(candidate: &str, expected: &str) -> bool {
    !expected.is_empty() && candidate == expected
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
