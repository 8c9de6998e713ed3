//! Action modules for card service operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod cards;
mod settings;
mod stats;
mod words;

pub use cards::CardActions;
pub use settings::SettingsActions;
pub use stats::StatsActions;
pub use words::WordActions;
