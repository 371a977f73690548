//! Provider error types.

use std::time::Duration;

/// The live provider could not produce a usable answer.
///
/// Every variant leads to the same recovery (fall back to offline data); the
/// variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum ProviderUnavailable {
    /// The call did not finish within its time budget
    #[error("provider timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// HTTP request failed (connection refused, reset, TLS, ...)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Payload was not the expected shape
    #[error("malformed provider payload: {message}")]
    Malformed {
        message: String,
        body: Option<String>,
    },
}

impl ProviderUnavailable {
    /// Build a `Malformed` error, keeping a prefix of the body for debugging.
    pub(crate) fn malformed(message: impl ToString, body: &str) -> Self {
        ProviderUnavailable::Malformed {
            message: message.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
