//! Server error type.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures (`Io`, `Config`, `MissingKey`) end the process from
//! `main`. Handler failures render as a JSON body tagged with the variant
//! name, always with a 500 status: none of these are the caller's fault.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("missing configuration key: {0}")]
    MissingKey(&'static str),
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("`{0}` produced no stdout handle")]
    NoStdout(&'static str),
}

impl Error {
    /// Stable machine-readable name used in JSON bodies.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::MissingKey(_) => "missing_key",
            Self::Spawn { .. } => "spawn",
            Self::NoStdout(_) => "no_stdout",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = json!({ "type": self.kind(), "message": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
