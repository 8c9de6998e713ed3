//! Domain types for the card review service.
//!
//! This module contains the data structures exchanged with the service:
//! cards with their translations, feedback payloads, and settings.

mod card;
mod settings;

pub use card::{Card, CardDraft, CardStatus, FeedbackKind, FeedbackOutcome, Translation};
pub use settings::{CollectionStats, Settings};
