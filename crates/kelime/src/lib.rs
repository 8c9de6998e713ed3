//! An async Rust client for the kelime card review service.
//!
//! This crate provides type-safe access to the card review REST API: fetching
//! review queues, submitting recall feedback, searching and creating cards, and
//! reading or updating study settings.
//!
//! # Quick Start
//!
//! ```no_run
//! use kelime::KelimeClient;
//!
//! # async fn example() -> kelime::Result<()> {
//! // Create a client with default settings (localhost:5001)
//! let client = KelimeClient::new();
//!
//! // Fetch up to ten cards due for review
//! let queue = client.cards().review_queue(10).await?;
//! println!("{} cards due", queue.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use kelime::KelimeClient;
//!
//! let client = KelimeClient::builder()
//!     .url("http://localhost:5001")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`KelimeClient::cards()`] - Review queue, feedback submission, card creation, status lists
//! - [`KelimeClient::words()`] - Dictionary lookup for new headwords
//! - [`KelimeClient::settings()`] - Read and update study settings
//! - [`KelimeClient::stats()`] - Collection-wide learning counts

pub mod actions;
pub mod client;
pub mod error;
mod response;
pub mod types;

pub use client::{ClientBuilder, KelimeClient};
pub use error::{Error, Result};
pub use types::{
    Card, CardDraft, CardStatus, CollectionStats, FeedbackKind, FeedbackOutcome, Settings,
    Translation,
};
