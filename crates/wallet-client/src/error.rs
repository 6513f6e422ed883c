//! Client error taxonomy.

use thiserror::Error;

/// Failure of a single backend operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a decodable body: connection failure,
    /// or a body that was not the expected JSON.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but did not accept the request: an envelope
    /// without `success: true`. The message is the server-provided `error`
    /// string, or a generic `HTTP {status}` fallback.
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided or fallback message.
        message: String,
    },

    /// The backend reported success but the payload field was missing.
    #[error("malformed response: missing {0}")]
    Malformed(&'static str),
}

impl ClientError {
    /// Whether the backend explicitly rejected the request (as opposed to
    /// being unreachable or returning garbage).
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
