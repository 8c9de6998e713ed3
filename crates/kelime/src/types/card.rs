//! Card-related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One vocabulary entry under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Opaque card identifier, required for feedback submission.
    pub id: i64,
    /// The foreign-language headword.
    #[serde(rename = "turkish_word")]
    pub word: String,
    /// Translations in display order. May be empty; renderers show nothing
    /// rather than failing.
    #[serde(default)]
    pub translations: Vec<Translation>,
    /// Learning status as reported by the service.
    #[serde(default)]
    pub status: Option<CardStatus>,
    /// Consecutive correct answers accumulated server-side.
    #[serde(default)]
    pub correct_repetitions: i64,
}

/// One sense of a card.
///
/// Either example sentence may be absent or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Translation {
    /// Translation in the learner's language.
    #[serde(rename = "ukrainian", default)]
    pub native_text: String,
    /// Example sentence in the foreign language.
    #[serde(rename = "example_turkish", default)]
    pub example_foreign: Option<String>,
    /// Translation of the example sentence.
    #[serde(rename = "example_ukrainian", default)]
    pub example_native: Option<String>,
}

/// A card that has not been stored yet.
///
/// Returned by dictionary lookup and sent back verbatim to create the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDraft {
    /// The foreign-language headword.
    #[serde(rename = "turkish_word")]
    pub word: String,
    /// Proposed translations in display order.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Learning status of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// Never reviewed.
    New,
    /// In active rotation.
    Learning,
    /// Past the learned threshold.
    Learned,
}

impl CardStatus {
    /// The wire/path representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            CardStatus::New => "new",
            CardStatus::Learning => "learning",
            CardStatus::Learned => "learned",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(CardStatus::New),
            "learning" => Ok(CardStatus::Learning),
            "learned" => Ok(CardStatus::Learned),
            other => Err(format!(
                "invalid status '{other}' (expected new, learning, or learned)"
            )),
        }
    }
}

/// Learner-supplied recall judgment for one displayed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// The learner recalled the word.
    Correct,
    /// The learner was not sure.
    Unsure,
    /// The learner did not recall the word.
    Incorrect,
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackKind::Correct => "correct",
            FeedbackKind::Unsure => "unsure",
            FeedbackKind::Incorrect => "incorrect",
        };
        f.write_str(s)
    }
}

/// Service response to a feedback submission.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackOutcome {
    /// Whether this submission pushed the card over the learned threshold.
    #[serde(default)]
    pub became_learned: bool,
    /// The card's updated server-side state.
    #[serde(flatten)]
    pub card: Card,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_deserializes_service_payload() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": 7,
                "turkish_word": "elma",
                "translations": [
                    {"ukrainian": "яблуко", "example_turkish": "Elma kırmızı.", "example_ukrainian": "Яблуко червоне."}
                ],
                "status": "learning",
                "correct_repetitions": 2
            }"#,
        )
        .unwrap();

        assert_eq!(card.id, 7);
        assert_eq!(card.word, "elma");
        assert_eq!(card.translations.len(), 1);
        assert_eq!(card.translations[0].native_text, "яблуко");
        assert_eq!(card.status, Some(CardStatus::Learning));
    }

    #[test]
    fn test_card_tolerates_missing_translations() {
        let card: Card = serde_json::from_str(r#"{"id": 1, "turkish_word": "su"}"#).unwrap();
        assert!(card.translations.is_empty());
        assert_eq!(card.status, None);
    }

    #[test]
    fn test_feedback_kind_wire_format() {
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Incorrect).unwrap(),
            "\"incorrect\""
        );
    }

    #[test]
    fn test_feedback_outcome_flattens_card() {
        let outcome: FeedbackOutcome = serde_json::from_str(
            r#"{"id": 3, "turkish_word": "kapı", "translations": [], "status": "learned",
                "correct_repetitions": 3, "became_learned": true}"#,
        )
        .unwrap();
        assert!(outcome.became_learned);
        assert_eq!(outcome.card.word, "kapı");
    }
}
