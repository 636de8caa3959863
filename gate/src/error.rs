//! Gate error type.

/// Failures reported by the host environment while running the gate.
///
/// Declining the prompt is not an error; see [`crate::GateOutcome::Declined`].
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("cookie write rejected: {0}")]
    CookieWrite(String),
    #[error("no browser document available")]
    NoDocument,
}
