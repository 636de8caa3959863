//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the auth layer via the
//! `State` extractor. The deploy table is shared with the config reload task,
//! which replaces it wholesale under the write lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::DeployTable;

/// Clone is required by Axum; the table is Arc-wrapped and the token is
/// shared.
#[derive(Clone)]
pub struct AppState {
    /// Value the `auth_token` cookie or `token` query parameter must match.
    pub expected_token: Arc<str>,
    pub deploy: Arc<RwLock<DeployTable>>,
}

impl AppState {
    #[must_use]
    pub fn new(expected_token: impl Into<Arc<str>>, deploy: Arc<RwLock<DeployTable>>) -> Self {
        Self { expected_token: expected_token.into(), deploy }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
