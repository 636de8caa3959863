//! Cookie store capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser cookie jar is process-wide, origin-scoped state. The gate only
//! touches it through [`CookieStore`], so tests and non-browser hosts can hand
//! it an in-memory jar instead of `document.cookie`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::cookie::{self, CookieAttributes, CookieHeader};
use crate::error::GateError;

/// Narrow read/write access to a cookie jar.
pub trait CookieStore {
    /// Full cookie header as the host exposes it (`a=1; b=2`).
    fn header(&self) -> String;

    /// Write one cookie.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::CookieWrite`] if the host rejects the write.
    fn set(&mut self, key: &str, value: &str, attributes: &CookieAttributes) -> Result<(), GateError>;

    /// Read one cookie value by exact key.
    fn get(&self, key: &str) -> Option<String> {
        CookieHeader::parse(&self.header()).get(key).map(str::to_owned)
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// In-memory cookie jar. Behaves like `document.cookie` for a single path:
/// writes replace the value of an existing key and attributes are not echoed
/// back on read.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieStore {
    jar: CookieHeader,
    writes: Vec<String>,
}

impl MemoryCookieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a raw header string.
    #[must_use]
    pub fn with_header(raw: &str) -> Self {
        Self { jar: CookieHeader::parse(raw), writes: Vec::new() }
    }

    /// Serialized cookie strings written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl CookieStore for MemoryCookieStore {
    fn header(&self) -> String {
        self.jar.to_string()
    }

    fn set(&mut self, key: &str, value: &str, attributes: &CookieAttributes) -> Result<(), GateError> {
        self.jar.set(key, value);
        self.writes.push(cookie::serialize(key, value, attributes));
        Ok(())
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `document.cookie` of the current page.
#[cfg(feature = "hydrate")]
pub struct DocumentCookieStore {
    document: web_sys::HtmlDocument,
}

#[cfg(feature = "hydrate")]
impl DocumentCookieStore {
    /// Bind to the document of the global `window`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NoDocument`] outside an HTML document context.
    pub fn from_window() -> Result<Self, GateError> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(GateError::NoDocument)?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| GateError::NoDocument)?;
        Ok(Self { document })
    }
}

#[cfg(feature = "hydrate")]
impl CookieStore for DocumentCookieStore {
    fn header(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: &str, attributes: &CookieAttributes) -> Result<(), GateError> {
        self.document
            .set_cookie(&cookie::serialize(key, value, attributes))
            .map_err(|e| GateError::CookieWrite(format!("{e:?}")))
    }
}
