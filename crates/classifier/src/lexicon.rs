//! The keyword lexicon: trigger words per mood, and token extraction.
//!
//! The lexicon is process-wide constant state, declared once and shared
//! read-only by every classification. Declaration order is load-bearing:
//! the positive-band tie-break picks the first-declared mood among equal
//! maxima, so this is an ordered slice rather than a map.

use crate::types::{KeywordCounts, Mood};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Trigger words per mood, in tie-break order.
///
/// `happy` carries no trigger words; it participates only so that keyword
/// counts are total over all seven labels. It is last so it can never
/// shadow a mood with actual evidence.
pub const MOOD_LEXICON: &[(Mood, &[&str])] = &[
    (
        Mood::Focused,
        &[
            "focus",
            "study",
            "deadline",
            "exam",
            "code",
            "debug",
            "project",
            "reading",
            "research",
            "assignment",
        ],
    ),
    (
        Mood::Energetic,
        &["gym", "run", "workout", "dance", "party", "hype", "power", "pump"],
    ),
    (
        Mood::Calm,
        &["calm", "relax", "meditate", "peace", "yoga", "sleep", "breathe", "chill"],
    ),
    (
        Mood::Sad,
        &["sad", "tired", "cry", "lonely", "depressed", "down", "blue"],
    ),
    (
        Mood::Angry,
        &["angry", "frustrated", "annoyed", "irritated", "mad", "furious"],
    ),
    (Mood::Romantic, &["love", "romance", "date", "heart", "crush"]),
    (Mood::Happy, &[]),
];

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("token pattern is valid"));

/// Iterate over every token occurrence in lowercased text, in order.
///
/// Tokens are maximal runs of lowercase ASCII letters.
pub(crate) fn token_iter(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Extract the set of distinct tokens from lowercased text.
///
/// Duplicates collapse, so a word repeated three times contributes one
/// unit of evidence.
pub fn tokenize(text: &str) -> HashSet<&str> {
    token_iter(text).collect()
}

/// Count, for every mood, how many of its trigger words appear in the
/// token set.
pub fn keyword_counts(tokens: &HashSet<&str>) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for (mood, words) in MOOD_LEXICON {
        let count = words.iter().filter(|word| tokens.contains(**word)).count();
        counts.set(*mood, count);
    }
    counts
}
