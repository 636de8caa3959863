use super::*;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;

fn jar(cookie: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, cookie.parse().unwrap());
    CookieJar::from_headers(&headers)
}

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================================
// request_token
// =============================================================================

#[test]
fn token_from_cookie() {
    let jar = jar("foo=1; auth_token=abc; bar=2");
    let query = query(&[]);
    assert_eq!(request_token(&jar, &query), Some("abc"));
}

#[test]
fn token_from_query_when_no_cookie() {
    let jar = CookieJar::new();
    let query = query(&[("token", "q")]);
    assert_eq!(request_token(&jar, &query), Some("q"));
}

#[test]
fn cookie_takes_precedence_over_query() {
    let jar = jar("auth_token=from-cookie");
    let query = query(&[("token", "from-query")]);
    assert_eq!(request_token(&jar, &query), Some("from-cookie"));
}

#[test]
fn empty_cookie_falls_back_to_query() {
    let jar = jar("auth_token=");
    let query = query(&[("token", "q")]);
    assert_eq!(request_token(&jar, &query), Some("q"));
}

#[test]
fn hyphenated_cookie_name_is_not_accepted() {
    let jar = jar("auth-token=abc");
    let query = query(&[]);
    assert_eq!(request_token(&jar, &query), None);
}

#[test]
fn empty_query_token_is_none() {
    let jar = CookieJar::new();
    let query = query(&[("token", "")]);
    assert_eq!(request_token(&jar, &query), None);
}

// =============================================================================
// token_matches
// =============================================================================

#[test]
fn matching_token_accepted() {
    assert!(token_matches("s3cret", "s3cret"));
}

#[test]
fn mismatched_token_rejected() {
    assert!(!token_matches("guess", "s3cret"));
    assert!(!token_matches("S3CRET", "s3cret"));
}

#[test]
fn empty_expected_never_matches() {
    assert!(!token_matches("", ""));
    assert!(!token_matches("anything", ""));
}
