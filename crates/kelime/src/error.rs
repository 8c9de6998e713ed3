//! Error types for the kelime crate.
//!
//! # Error Handling
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::ConnectionRefused`]: the card service is not running
//! - [`Error::Api`]: the service rejected the request (e.g. duplicate card,
//!   unknown status, lookup failure) and returned a human-readable message
//!
//! # Example
//!
//! ```no_run
//! use kelime::{Error, KelimeClient};
//!
//! # async fn example() {
//! let client = KelimeClient::new();
//!
//! match client.stats().fetch().await {
//!     Ok(stats) => println!("{} cards learned", stats.learned),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start the card service first");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for card service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Typically indicates network issues unrelated to the service itself.
    /// For connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned an error payload.
    ///
    /// The message string contains the service's explanation. Common messages
    /// include:
    /// - "Card already exists"
    /// - "Failed to search for the word"
    /// - "Invalid status"
    #[error("service error ({status}): {message}")]
    Api {
        /// HTTP status code of the rejected request.
        status: u16,
        /// Human-readable message from the service's error payload.
        message: String,
    },

    /// JSON serialization/deserialization error.
    ///
    /// May occur if the service returns unexpected data formats.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - the card service is likely not running.
    #[error("Could not connect to the card service. Is the backend running?")]
    ConnectionRefused,
}

/// A specialized Result type for card service operations.
pub type Result<T> = std::result::Result<T, Error>;
