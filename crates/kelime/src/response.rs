//! Internal response body types for the card service API.

use serde::Deserialize;

/// The error payload returned by the service alongside a non-success status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    /// The human-readable error message.
    pub error: String,
}

/// Acknowledgement body for write operations that return only a message.
#[derive(Debug, Deserialize)]
pub(crate) struct Acknowledgement {
    /// Confirmation message; informational only.
    #[serde(default)]
    #[allow(dead_code)]
    pub message: String,
}
