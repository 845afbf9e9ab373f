//! Sentiment scoring: the collaborator seam and the default analyzer.
//!
//! The classifier only depends on a single number, the compound polarity in
//! `[-1.0, 1.0]`. The trait keeps that dependency swappable; the default
//! implementation is a valence-lexicon analyzer so the engine runs without
//! any model or network dependency.

use std::collections::HashMap;

/// A sentiment-scoring capability.
///
/// Implementations must be deterministic for identical input; the
/// classifier's idempotence guarantee rests on that.
pub trait SentimentAnalyzer: Send + Sync {
    /// Compound polarity of the text, bounded to `[-1.0, 1.0]`.
    fn score(&self, text: &str) -> f64;
}

// Valence tiers. Words are lowercase; the analyzer sees text the
// classifier has already lowercased.
const STRONGLY_POSITIVE: &[&str] = &[
    "amazing",
    "wonderful",
    "fantastic",
    "excellent",
    "incredible",
    "ecstatic",
    "thrilled",
    "overjoyed",
    "perfect",
    "brilliant",
];

const POSITIVE: &[&str] = &[
    "happy",
    "great",
    "love",
    "loved",
    "lovely",
    "joy",
    "joyful",
    "excited",
    "fun",
    "awesome",
    "beautiful",
    "grateful",
    "proud",
    "glad",
    "delighted",
    "cheerful",
    "hopeful",
    "enjoyed",
    "laughing",
    "smile",
];

const MILDLY_POSITIVE: &[&str] = &[
    "good",
    "nice",
    "fine",
    "okay",
    "peaceful",
    "relaxed",
    "content",
    "calm",
    "rested",
    "comfortable",
    "pleasant",
];

const MILDLY_NEGATIVE: &[&str] = &[
    "tired",
    "down",
    "blue",
    "bored",
    "gloomy",
    "rough",
    "meh",
    "restless",
];

const NEGATIVE: &[&str] = &[
    "sad",
    "cry",
    "crying",
    "cried",
    "lonely",
    "angry",
    "depressed",
    "frustrated",
    "annoyed",
    "irritated",
    "mad",
    "anxious",
    "stressed",
    "scared",
    "afraid",
    "hurt",
    "hurting",
    "exhausted",
    "overwhelmed",
    "upset",
    "disappointed",
    "worried",
    "broken",
];

const STRONGLY_NEGATIVE: &[&str] = &[
    "devastated",
    "heartbroken",
    "miserable",
    "hopeless",
    "furious",
    "hate",
    "hated",
    "terrible",
    "awful",
    "horrible",
    "worthless",
    "unbearable",
];

/// Valence-lexicon sentiment analyzer.
///
/// ## Algorithm
/// 1. Tokenize into lowercase letter runs
/// 2. Look up each token's valence in the word table
/// 3. Average the valences of matched tokens
/// 4. Clamp to `[-1.0, 1.0]`; no matches score 0.0
#[derive(Debug, Clone)]
pub struct ValenceAnalyzer {
    valences: HashMap<&'static str, f64>,
}

impl ValenceAnalyzer {
    pub fn new() -> Self {
        let mut valences = HashMap::new();
        let tiers: &[(&'static [&'static str], f64)] = &[
            (STRONGLY_POSITIVE, 0.85),
            (POSITIVE, 0.6),
            (MILDLY_POSITIVE, 0.3),
            (MILDLY_NEGATIVE, -0.35),
            (NEGATIVE, -0.6),
            (STRONGLY_NEGATIVE, -0.85),
        ];
        for (words, valence) in tiers {
            for word in *words {
                valences.insert(*word, *valence);
            }
        }
        Self { valences }
    }
}

impl Default for ValenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for ValenceAnalyzer {
    fn score(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut matched = 0usize;

        // Instances count here, unlike keyword evidence: a word repeated
        // three times weighs three times in the average.
        for token in crate::lexicon::token_iter(text) {
            if let Some(valence) = self.valences.get(token) {
                sum += valence;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }
        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}
