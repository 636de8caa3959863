//! Cookie header parsing and cookie-string serialization.
//!
//! DESIGN
//! ======
//! Scripts see the cookie jar as one string of `key=value` pairs joined by
//! `; `. The header is rebuilt into a key/value map rather than searched for a
//! delimited substring, so values containing `=` and keys that end with
//! another key's name resolve correctly.
//!
//! Entries keep their header order. When a key repeats, the first one wins:
//! browsers list the cookie with the most specific path first.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::fmt;

/// Parsed view of a `Cookie` header / `document.cookie` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieHeader {
    entries: Vec<(String, String)>,
}

impl CookieHeader {
    /// Parse a raw header. Segments are split on `;`, trimmed, then split once
    /// on the first `=`. Segments without `=` or with an empty key are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut header = Self::default();
        for segment in raw.split(';') {
            let Some((key, value)) = segment.trim().split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() || header.get(key).is_some() {
                continue;
            }
            header.entries.push((key.to_owned(), value.trim().to_owned()));
        }
        header
    }

    /// Value for `key`. Keys are case-sensitive.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert `key`, or replace its value in place if it already exists.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => value.clone_into(&mut entry.1),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for CookieHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Attributes attached to a cookie write.
///
/// Only `path` is modelled. Expiry, `Secure`, `HttpOnly` and `SameSite` are
/// left to the browser defaults, which makes the cookie session-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieAttributes {
    pub path: Option<String>,
}

impl CookieAttributes {
    /// Scope the cookie to the whole origin (`path=/`).
    #[must_use]
    pub fn root_path() -> Self {
        Self { path: Some("/".to_owned()) }
    }
}

/// Serialize a cookie write the way `document.cookie = ...` expects it,
/// e.g. `auth_token=abc;path=/`.
#[must_use]
pub fn serialize(key: &str, value: &str, attributes: &CookieAttributes) -> String {
    let mut out = format!("{key}={value}");
    if let Some(path) = &attributes.path {
        out.push_str(";path=");
        out.push_str(path);
    }
    out
}
