//! The token gate itself.
//!
//! DESIGN
//! ======
//! One pass per page load: read the jar, and only if `auth_token` is missing
//! or empty, prompt once. A non-empty answer is written back with `path=/`
//! and no other attributes. A cancel or empty answer produces one alert and
//! leaves the jar untouched; the page continues without a token.
//!
//! The entered value is stored as typed. It is not validated, expired or
//! refreshed here; the server decides whether it is any good.

#[cfg(test)]
#[path = "token_gate_test.rs"]
mod token_gate_test;

use crate::TOKEN_COOKIE;
use crate::cookie::CookieAttributes;
use crate::dialog::{DECLINED_MESSAGE, Dialogs, PROMPT_MESSAGE};
use crate::error::GateError;
use crate::store::CookieStore;

/// What a gate pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// A token cookie was already set; the user was not asked.
    Present(String),
    /// The user supplied a token and it was written to the jar. Holds the
    /// value read back from the jar, which is what later passes will see.
    Stored(String),
    /// The user cancelled or left the prompt empty.
    Declined,
}

impl GateOutcome {
    /// Token available to the page after this pass, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Present(token) | Self::Stored(token) => Some(token),
            Self::Declined => None,
        }
    }
}

pub struct TokenGate<S, D> {
    store: S,
    dialogs: D,
}

impl<S: CookieStore, D: Dialogs> TokenGate<S, D> {
    pub fn new(store: S, dialogs: D) -> Self {
        Self { store, dialogs }
    }

    /// Make sure the jar holds an auth token, asking the user if it does not.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::CookieWrite`] if the host refuses the cookie write
    /// or the jar does not hold a token afterwards.
    pub fn ensure_token(&mut self) -> Result<GateOutcome, GateError> {
        if let Some(token) = self.current_token() {
            log::debug!("auth token already present");
            return Ok(GateOutcome::Present(token));
        }

        let Some(token) = self.dialogs.prompt(PROMPT_MESSAGE).filter(|t| !t.is_empty()) else {
            log::warn!("auth token prompt declined");
            self.dialogs.alert(DECLINED_MESSAGE);
            return Ok(GateOutcome::Declined);
        };

        self.store
            .set(TOKEN_COOKIE, &token, &CookieAttributes::root_path())?;

        // The jar may keep less than was typed (`a;b` stores `a`) or nothing.
        let Some(stored) = self.current_token() else {
            return Err(GateError::CookieWrite("cookie jar did not retain the token".to_owned()));
        };
        log::info!("auth token stored");
        Ok(GateOutcome::Stored(stored))
    }

    /// Non-empty `auth_token` value currently in the jar.
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.store.get(TOKEN_COOKIE).filter(|t| !t.is_empty())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.dialogs)
    }
}
