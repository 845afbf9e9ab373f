//! Core domain types for mood classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of mood categories.
///
/// Every classification produces exactly one of these seven labels,
/// never an arbitrary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Focused,
    Calm,
    Energetic,
    Sad,
    Angry,
    Romantic,
}

impl Mood {
    /// All seven moods, in declaration order.
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Focused,
        Mood::Calm,
        Mood::Energetic,
        Mood::Sad,
        Mood::Angry,
        Mood::Romantic,
    ];

    /// The lowercase label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Focused => "focused",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Romantic => "romantic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword evidence per mood: the number of distinct tokens from the input
/// that appear in each mood's trigger lexicon.
///
/// A fixed-field struct rather than a map, so serialization always carries
/// all seven labels in a stable key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCounts {
    pub happy: usize,
    pub focused: usize,
    pub calm: usize,
    pub energetic: usize,
    pub sad: usize,
    pub angry: usize,
    pub romantic: usize,
}

impl KeywordCounts {
    pub fn get(&self, mood: Mood) -> usize {
        match mood {
            Mood::Happy => self.happy,
            Mood::Focused => self.focused,
            Mood::Calm => self.calm,
            Mood::Energetic => self.energetic,
            Mood::Sad => self.sad,
            Mood::Angry => self.angry,
            Mood::Romantic => self.romantic,
        }
    }

    pub fn set(&mut self, mood: Mood, count: usize) {
        match mood {
            Mood::Happy => self.happy = count,
            Mood::Focused => self.focused = count,
            Mood::Calm => self.calm = count,
            Mood::Energetic => self.energetic = count,
            Mood::Sad => self.sad = count,
            Mood::Angry => self.angry = count,
            Mood::Romantic => self.romantic = count,
        }
    }
}

/// The result of classifying one journal entry.
///
/// Immutable once produced. The full keyword counts are retained for
/// observability even though only one mood was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub mood: Mood,
    pub compound: f64,
    pub keyword_counts: KeywordCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_serializes_lowercase() {
        let json = serde_json::to_string(&Mood::Energetic).unwrap();
        assert_eq!(json, "\"energetic\"");
    }

    #[test]
    fn test_mood_display_matches_wire_label() {
        for mood in Mood::ALL {
            assert_eq!(mood.to_string(), mood.as_str());
        }
    }

    #[test]
    fn test_keyword_counts_get_set_roundtrip() {
        let mut counts = KeywordCounts::default();
        for (i, mood) in Mood::ALL.into_iter().enumerate() {
            counts.set(mood, i);
        }
        for (i, mood) in Mood::ALL.into_iter().enumerate() {
            assert_eq!(counts.get(mood), i);
        }
    }

    #[test]
    fn test_keyword_counts_serialize_all_seven_labels() {
        let value = serde_json::to_value(KeywordCounts::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        for mood in Mood::ALL {
            assert!(object.contains_key(mood.as_str()), "missing {}", mood);
        }
    }
}
