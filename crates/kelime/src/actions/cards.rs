//! Card-related service actions.
//!
//! This module covers the review queue, feedback submission, card creation,
//! and status-filtered listings.
//!
//! # Example
//!
//! ```no_run
//! use kelime::{FeedbackKind, KelimeClient};
//!
//! # async fn example() -> kelime::Result<()> {
//! let client = KelimeClient::new();
//!
//! // Fetch cards due for review
//! let queue = client.cards().review_queue(10).await?;
//!
//! // Report the first one as recalled
//! if let Some(card) = queue.first() {
//!     let outcome = client.cards().submit_feedback(card.id, FeedbackKind::Correct).await?;
//!     if outcome.became_learned {
//!         println!("'{}' is now learned!", card.word);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::KelimeClient;
use crate::error::Result;
use crate::types::{Card, CardDraft, CardStatus, FeedbackKind, FeedbackOutcome};

/// Provides access to card-related service operations.
///
/// Obtained via [`KelimeClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a KelimeClient,
}

// Parameter structs
#[derive(Serialize)]
struct ReviewQueueQuery {
    limit: u32,
}

#[derive(Serialize)]
struct SubmitFeedbackBody {
    feedback: FeedbackKind,
}

impl<'a> CardActions<'a> {
    /// Fetch the next batch of cards due for review.
    ///
    /// The service decides which cards are due and in what order; an empty
    /// result means nothing is due right now and is not an error. The service
    /// may return fewer than `limit` cards.
    pub async fn review_queue(&self, limit: u32) -> Result<Vec<Card>> {
        self.client
            .get_with_query("/api/cards/review", &ReviewQueueQuery { limit })
            .await
    }

    /// Submit recall feedback for a card.
    ///
    /// Returns the card's updated server-side state together with a flag
    /// telling whether this submission pushed it over the learned threshold.
    pub async fn submit_feedback(
        &self,
        card_id: i64,
        feedback: FeedbackKind,
    ) -> Result<FeedbackOutcome> {
        self.client
            .put(
                &format!("/api/cards/{card_id}/review"),
                &SubmitFeedbackBody { feedback },
            )
            .await
    }

    /// Create a card from a draft.
    ///
    /// Fails with a service error if a card for the same headword already
    /// exists.
    pub async fn add(&self, draft: &CardDraft) -> Result<Card> {
        self.client.post("/api/cards", draft).await
    }

    /// List all cards with the given learning status, sorted by headword.
    pub async fn by_status(&self, status: CardStatus) -> Result<Vec<Card>> {
        self.client
            .get(&format!("/api/cards/list/{status}"))
            .await
    }
}
