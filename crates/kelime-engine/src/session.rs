//! The study block state machine and session statistics.
//!
//! A *block* is one bounded study session: a queue of cards fetched at start
//! time, reviewed one by one through a reveal → feedback → advance cycle, and
//! summarized when the queue is exhausted.
//!
//! ```text
//! Idle --start_block--> AwaitingQueue --(queue empty)--> Idle
//! AwaitingQueue --(queue nonempty)--> Active(hidden, card = head)
//! Active(hidden) --reveal--> Active(revealed)
//! Active(revealed) --submit_feedback--> Active(answered)
//! Active(answered) --advance--> Active(hidden, next card) | Summarizing
//! Summarizing --start_block--> AwaitingQueue
//! ```
//!
//! Sequencing policy: [`StudySession::reveal`] outside its phase is a silent
//! no-op; every other operation invoked out of phase returns
//! [`Error::OutOfPhase`](crate::Error::OutOfPhase) and changes nothing.

use std::collections::VecDeque;

use kelime::{Card, FeedbackKind, FeedbackOutcome, KelimeClient};
use serde::Serialize;

use crate::error::{Error, Result};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No active block.
    Idle,
    /// A block was requested; the queue fetch is in flight.
    AwaitingQueue,
    /// A block is running and a current card exists.
    Active,
    /// The queue is exhausted; the final stats are available.
    Summarizing,
}

/// Where the current card is in its reveal/feedback cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPhase {
    /// Translations are hidden; the learner is recalling.
    Hidden,
    /// Translations are visible; feedback has not been given yet.
    Revealed,
    /// Feedback was acknowledged; the card is ready to be advanced past.
    Answered,
}

/// Outcome of a successful [`StudySession::start_block`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStart {
    /// A block started with this many cards.
    Started {
        /// Queue length at fetch time; fixed for the whole block.
        total: usize,
    },
    /// The service has no cards due. Not an error; the session stays idle.
    Empty,
}

/// Outcome of a successful [`StudySession::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new current card is loaded, translations hidden.
    NextCard,
    /// The queue is exhausted; the session is now summarizing.
    BlockComplete,
}

/// Counts of feedback submitted during one block.
///
/// Created fresh at block start, frozen once the block reaches
/// [`SessionState::Summarizing`], and replaced by the next block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Cards the learner recalled.
    pub correct: u32,
    /// Cards the learner was unsure about.
    pub unsure: u32,
    /// Cards the learner did not recall.
    pub incorrect: u32,
    /// Cards whose feedback pushed them over the learned threshold.
    pub became_learned: u32,
}

impl SessionStats {
    /// Total number of acknowledged feedback submissions.
    pub fn total(&self) -> u32 {
        self.correct + self.unsure + self.incorrect
    }

    fn record(&mut self, kind: FeedbackKind) {
        match kind {
            FeedbackKind::Correct => self.correct += 1,
            FeedbackKind::Unsure => self.unsure += 1,
            FeedbackKind::Incorrect => self.incorrect += 1,
        }
    }
}

/// Drives one study block end-to-end.
///
/// The session exclusively owns the queue and current-card reference for the
/// lifetime of one block; queue order is authoritative (the service decides
/// which cards are due and in what order, the session never reorders or
/// filters). Callers are expected to serialize operations: one in-flight
/// async call at a time, with the triggering control disabled until it
/// resolves.
///
/// # Example
///
/// ```no_run
/// use kelime_engine::{KelimeClient, StudySession};
///
/// # async fn example() -> kelime_engine::Result<()> {
/// // Create with default client settings
/// let session = StudySession::new();
///
/// // Or with a custom client
/// let client = KelimeClient::builder().url("http://localhost:5001").build();
/// let session = StudySession::from_client(client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StudySession {
    client: KelimeClient,
    state: SessionState,
    queue: VecDeque<Card>,
    current: Option<Card>,
    phase: CardPhase,
    block_total: usize,
    stats: SessionStats,
}

impl StudySession {
    /// Create a session with default client settings.
    ///
    /// Connects to the card service at `http://127.0.0.1:5001`.
    pub fn new() -> Self {
        Self::from_client(KelimeClient::new())
    }

    /// Create a session from an existing client.
    pub fn from_client(client: KelimeClient) -> Self {
        Self {
            client,
            state: SessionState::Idle,
            queue: VecDeque::new(),
            current: None,
            phase: CardPhase::Hidden,
            block_total: 0,
            stats: SessionStats::default(),
        }
    }

    /// Get a reference to the underlying client.
    ///
    /// Use this for service operations outside the session lifecycle
    /// (collection stats, settings, card creation).
    pub fn client(&self) -> &KelimeClient {
        &self.client
    }

    /// Start a new study block with up to `requested_size` cards.
    ///
    /// Valid from `Idle` or `Summarizing`. Fetches the review queue from the
    /// service:
    ///
    /// - non-empty queue: stats reset, the first card is loaded hidden, and
    ///   [`BlockStart::Started`] reports the block total (the queue length at
    ///   fetch time, which may be less than `requested_size`)
    /// - empty queue: [`BlockStart::Empty`], back to `Idle`
    /// - fetch failure: back to `Idle` with no partial state, error returned
    pub async fn start_block(&mut self, requested_size: u32) -> Result<BlockStart> {
        match self.state {
            SessionState::Idle | SessionState::Summarizing => {}
            _ => {
                return Err(Error::OutOfPhase {
                    operation: "start_block",
                });
            }
        }

        self.state = SessionState::AwaitingQueue;
        self.clear_block();
        let cards = match self.client.cards().review_queue(requested_size).await {
            Ok(cards) => cards,
            Err(e) => {
                self.state = SessionState::Idle;
                return Err(e.into());
            }
        };

        if cards.is_empty() {
            self.state = SessionState::Idle;
            return Ok(BlockStart::Empty);
        }

        self.queue = cards.into();
        self.block_total = self.queue.len();
        self.stats = SessionStats::default();
        self.state = SessionState::Active;
        self.load_next();
        Ok(BlockStart::Started {
            total: self.block_total,
        })
    }

    /// Expose the current card's translations.
    ///
    /// Valid only while a current card is hidden; otherwise a silent no-op.
    pub fn reveal(&mut self) {
        if self.state == SessionState::Active
            && self.current.is_some()
            && self.phase == CardPhase::Hidden
        {
            self.phase = CardPhase::Revealed;
        }
    }

    /// Submit recall feedback for the current card.
    ///
    /// Valid only while the current card is revealed and unanswered. The
    /// session tally is updated only after the service acknowledges the
    /// submission; on failure the stats and the card's phase are unchanged,
    /// so the call may simply be retried.
    pub async fn submit_feedback(&mut self, kind: FeedbackKind) -> Result<FeedbackOutcome> {
        let card_id = match (&self.state, &self.current, self.phase) {
            (SessionState::Active, Some(card), CardPhase::Revealed) => card.id,
            _ => {
                return Err(Error::OutOfPhase {
                    operation: "submit_feedback",
                });
            }
        };

        let outcome = self.client.cards().submit_feedback(card_id, kind).await?;

        self.stats.record(kind);
        if outcome.became_learned {
            self.stats.became_learned += 1;
        }
        self.phase = CardPhase::Answered;
        Ok(outcome)
    }

    /// Move past the answered current card.
    ///
    /// Valid only once feedback has been recorded for the current card.
    /// Loads the next card hidden, or freezes the stats and moves to
    /// `Summarizing` when the queue is exhausted.
    pub fn advance(&mut self) -> Result<Advance> {
        let answered = self.state == SessionState::Active
            && self.current.is_some()
            && self.phase == CardPhase::Answered;
        if !answered {
            return Err(Error::OutOfPhase {
                operation: "advance",
            });
        }

        if self.load_next() {
            Ok(Advance::NextCard)
        } else {
            self.current = None;
            self.state = SessionState::Summarizing;
            Ok(Advance::BlockComplete)
        }
    }

    /// The session's lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The card currently displayed, if any.
    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    /// The current card's reveal/feedback phase, if a card is displayed.
    pub fn phase(&self) -> Option<CardPhase> {
        self.current.as_ref().map(|_| self.phase)
    }

    /// Block progress as `(completed, block_total)`.
    ///
    /// `(0, k)` right after a block of `k` cards starts; the first element
    /// grows by one per [`advance`](Self::advance), reaching `(k, k)` exactly
    /// when the session becomes `Summarizing`.
    pub fn progress(&self) -> (usize, usize) {
        let pending = self.queue.len() + usize::from(self.current.is_some());
        (self.block_total - pending, self.block_total)
    }

    /// The running (or, after the block, final) feedback tally.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Drop any leftover block state from a previous block.
    ///
    /// The final stats survive until the next successful start so a summary
    /// stays renderable.
    fn clear_block(&mut self) {
        self.queue.clear();
        self.current = None;
        self.phase = CardPhase::Hidden;
        self.block_total = 0;
    }

    /// Pop the next card from the queue into the current slot, hidden.
    fn load_next(&mut self) -> bool {
        match self.queue.pop_front() {
            Some(card) => {
                self.current = Some(card);
                self.phase = CardPhase::Hidden;
                true
            }
            None => false,
        }
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}
