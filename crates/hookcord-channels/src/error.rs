//! Transport error types.

use thiserror::Error;

/// Errors reported by [`HttpTransport`](crate::transport::HttpTransport).
///
/// The webhook channel never wraps these; they reach the caller as-is.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook returned error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Invalid transport option `{key}`: {reason}")]
    InvalidOption { key: String, reason: String },
}

impl TransportError {
    /// HTTP status code, when the failure came from the webhook's response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::InvalidOption { .. } => None,
        }
    }
}
