//! The mood classifier: sentiment/keyword fusion with a fixed tie-break
//! policy.
//!
//! ## Algorithm
//! 1. Lowercase the text
//! 2. Score compound sentiment via the analyzer
//! 3. Tokenize and count keyword evidence per mood
//! 4. Pick a primary mood from three sentiment bands:
//!    - negative (compound <= -0.35): sad vs angry, ties favor sad
//!    - positive (compound >= 0.35): highest keyword count, ties favor the
//!      first-declared mood; happy when there is no evidence at all
//!    - neutral: focused, then calm, then happy
//! 5. Romantic override: romantic evidence plus non-negative sentiment
//!    forces romantic, whatever the band said
//!
//! The order of these steps is a behavioral contract; the override is
//! deliberately evaluated after the band decision.

use crate::lexicon::{MOOD_LEXICON, keyword_counts, tokenize};
use crate::sentiment::{SentimentAnalyzer, ValenceAnalyzer};
use crate::types::{Classification, KeywordCounts, Mood};
use std::sync::Arc;
use tracing::debug;

/// Compound score at or below which text counts as negative.
const NEGATIVE_THRESHOLD: f64 = -0.35;

/// Compound score at or above which text counts as positive.
const POSITIVE_THRESHOLD: f64 = 0.35;

/// Classifies journal text into one of the seven moods.
///
/// Stateless across calls; the analyzer is shared read-only, so one
/// classifier can serve any number of invocations.
#[derive(Clone)]
pub struct MoodClassifier {
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl MoodClassifier {
    /// Create a classifier backed by the default valence analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(ValenceAnalyzer::new()))
    }

    /// Create a classifier with a custom sentiment analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Classify text into a mood.
    ///
    /// Total over arbitrary input: empty or keyword-free text degrades to
    /// neutral sentiment, zero evidence and the happy default.
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        let compound = self.analyzer.score(&lowered).clamp(-1.0, 1.0);

        let tokens = tokenize(&lowered);
        let counts = keyword_counts(&tokens);

        let primary = if compound <= NEGATIVE_THRESHOLD {
            // Ties favor sad
            if counts.sad >= counts.angry {
                Mood::Sad
            } else {
                Mood::Angry
            }
        } else if compound >= POSITIVE_THRESHOLD {
            best_evidence(&counts).unwrap_or(Mood::Happy)
        } else if counts.focused > 0 {
            Mood::Focused
        } else if counts.calm > 0 {
            Mood::Calm
        } else {
            Mood::Happy
        };

        // The override never fires for negative-sentiment text
        let mood = if counts.romantic > 0 && compound >= 0.0 {
            Mood::Romantic
        } else {
            primary
        };

        debug!(
            "Classified text as {} (compound: {:.3}, primary: {})",
            mood, compound, primary
        );

        Classification {
            mood,
            compound,
            keyword_counts: counts,
        }
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The mood with the highest keyword count, if any count is positive.
///
/// Scans the lexicon in declaration order and keeps the first maximum, so
/// ties resolve to the first-declared mood.
fn best_evidence(counts: &KeywordCounts) -> Option<Mood> {
    let mut best: Option<(Mood, usize)> = None;
    for (mood, _) in MOOD_LEXICON {
        let count = counts.get(*mood);
        if count > 0 && best.is_none_or(|(_, max)| count > max) {
            best = Some((*mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}
