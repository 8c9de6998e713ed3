//! Settings and collection statistics types.

use serde::{Deserialize, Deserializer, Serialize};

/// Study settings stored on the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Correct repetitions required before a card counts as learned.
    #[serde(deserialize_with = "de_flexible_u32")]
    pub learned_threshold: u32,
    /// Number of cards requested per study block.
    #[serde(deserialize_with = "de_flexible_u32")]
    pub block_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        // Service-side defaults.
        Self {
            learned_threshold: 3,
            block_size: 10,
        }
    }
}

/// Collection-wide learning counts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CollectionStats {
    /// Total cards in the collection.
    #[serde(default)]
    pub total: u64,
    /// Cards past the learned threshold.
    pub learned: u64,
    /// Cards in active rotation.
    pub learning: u64,
    /// Cards never reviewed.
    pub new: u64,
}

/// Accept a number that the service may deliver as a JSON string.
///
/// The service persists settings as text and has been observed echoing them
/// back unconverted.
fn de_flexible_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_numbers() {
        let settings: Settings =
            serde_json::from_str(r#"{"learned_threshold": 3, "block_size": 10}"#).unwrap();
        assert_eq!(settings.learned_threshold, 3);
        assert_eq!(settings.block_size, 10);
    }

    #[test]
    fn test_settings_from_strings() {
        let settings: Settings =
            serde_json::from_str(r#"{"learned_threshold": "5", "block_size": " 20 "}"#).unwrap();
        assert_eq!(settings.learned_threshold, 5);
        assert_eq!(settings.block_size, 20);
    }

    #[test]
    fn test_settings_rejects_garbage() {
        let result: Result<Settings, _> =
            serde_json::from_str(r#"{"learned_threshold": "many", "block_size": 10}"#);
        assert!(result.is_err());
    }
}
