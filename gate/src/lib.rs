//! # gate
//!
//! Page-load token gate for the `arca` console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/api` route on the server requires an `auth_token` cookie. The gate
//! runs once when a page loads: if the cookie is missing it asks the user for
//! a token and stores it, so later requests carry it automatically.
//!
//! Browser bindings (`document.cookie`, `window.prompt`, `window.alert`) are
//! compiled only with the `hydrate` feature. Everything else is host
//! independent and runs in ordinary unit tests.

pub mod cookie;
pub mod dialog;
pub mod error;
pub mod store;
pub mod token_gate;

pub use cookie::{CookieAttributes, CookieHeader};
pub use dialog::{Dialogs, TerminalDialogs};
pub use error::GateError;
pub use store::{CookieStore, MemoryCookieStore};
pub use token_gate::{GateOutcome, TokenGate};

/// Cookie key holding the auth token. Shared with the server's auth layer.
pub const TOKEN_COOKIE: &str = "auth_token";

/// WASM entry point. Runs the gate against the live document once per load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let store = match store::DocumentCookieStore::from_window() {
        Ok(store) => store,
        Err(e) => {
            log::error!("token gate disabled: {e}");
            return;
        }
    };
    let Some(dialogs) = dialog::WindowDialogs::from_window() else {
        log::error!("token gate disabled: no window");
        return;
    };

    if let Err(e) = TokenGate::new(store, dialogs).ensure_token() {
        log::error!("token gate failed: {e}");
    }
}
