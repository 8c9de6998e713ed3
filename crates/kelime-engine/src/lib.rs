//! Study session engine for the kelime vocabulary trainer.
//!
//! This crate drives one study block end-to-end on top of the [`kelime`]
//! client library: it owns the review queue, the currently displayed card,
//! and the running feedback tally, and exposes explicit operations for the
//! reveal → feedback → advance cycle. A UI adapter (terminal, web, anything)
//! renders the observable state and forwards user input to these operations.
//!
//! # Quick Start
//!
//! ```no_run
//! use kelime_engine::{BlockStart, FeedbackKind, StudySession};
//!
//! # async fn example() -> kelime_engine::Result<()> {
//! let mut session = StudySession::new();
//!
//! match session.start_block(10).await? {
//!     BlockStart::Empty => println!("Nothing to review!"),
//!     BlockStart::Started { total } => {
//!         while let Some(card) = session.current_card().cloned() {
//!             println!("{} ({}/{})", card.word, session.progress().0 + 1, total);
//!             session.reveal();
//!             session.submit_feedback(FeedbackKind::Correct).await?;
//!             session.advance()?;
//!         }
//!         let stats = session.stats();
//!         println!("{} correct, {} became learned", stats.correct, stats.became_learned);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`session`] - The block state machine and session statistics
//! - [`highlight`] - Fail-soft headword highlighting for example sentences

mod error;

pub mod highlight;
pub mod session;

pub use error::{Error, Result};
pub use session::{Advance, BlockStart, CardPhase, SessionState, SessionStats, StudySession};

// Re-export kelime types for convenience
pub use kelime::{
    Card, CardDraft, CardStatus, ClientBuilder, CollectionStats, FeedbackKind, FeedbackOutcome,
    KelimeClient, Settings, Translation,
};
