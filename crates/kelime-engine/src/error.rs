//! Error types for kelime-engine.
//!
//! Errors from the session engine fall into two categories:
//!
//! 1. **Client errors**: wrapped from the underlying [`kelime::Error`] type;
//!    these are recoverable and leave the session state unchanged
//! 2. **Sequencing errors**: an operation was invoked outside its valid phase
//!
//! # Example
//!
//! ```no_run
//! use kelime_engine::{Error, StudySession};
//!
//! # async fn example() {
//! let mut session = StudySession::new();
//!
//! match session.start_block(10).await {
//!     Ok(outcome) => println!("{outcome:?}"),
//!     Err(Error::Client(kelime::Error::ConnectionRefused)) => {
//!         eprintln!("Is the card service running?");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// Result type for kelime-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying kelime client.
    ///
    /// The session state is unchanged; the failed operation may be retried.
    #[error(transparent)]
    Client(#[from] kelime::Error),

    /// An operation was invoked outside its valid session phase.
    ///
    /// The session state is unchanged. See the state diagram on
    /// [`StudySession`](crate::StudySession) for the valid orderings.
    #[error("'{operation}' is not valid in the current session phase")]
    OutOfPhase {
        /// The operation that was rejected.
        operation: &'static str,
    },
}
