//! # Classifier Crate
//!
//! This crate implements the mood classification engine: it fuses a
//! compound sentiment score with keyword-presence evidence to place a
//! journal entry into one of seven fixed mood categories.
//!
//! ## Components
//!
//! ### Keyword Lexicon
//! An ordered, process-wide constant table of trigger words per mood.
//! Declaration order doubles as the tie-break order, so it is a slice,
//! not a map.
//!
//! ### Sentiment Analyzer
//! The single external capability the classifier depends on, behind the
//! [`SentimentAnalyzer`] trait. The bundled [`ValenceAnalyzer`] scores
//! text from a word-valence table, so the default build has no model or
//! network dependency.
//!
//! ### Mood Classifier
//! The banded decision procedure itself: negative, positive and neutral
//! sentiment bands, each with its own keyword policy, plus the romantic
//! override evaluated last.
//!
//! ## Example Usage
//!
//! ```ignore
//! use classifier::MoodClassifier;
//!
//! let classifier = MoodClassifier::new();
//! let result = classifier.classify("Late night debugging before the deadline");
//!
//! println!("{} (compound {:.2})", result.mood, result.compound);
//! ```

// Public modules
pub mod classify;
pub mod lexicon;
pub mod sentiment;
pub mod types;

// Re-export commonly used types
pub use classify::MoodClassifier;
pub use lexicon::{MOOD_LEXICON, keyword_counts, tokenize};
pub use sentiment::{SentimentAnalyzer, ValenceAnalyzer};
pub use types::{Classification, KeywordCounts, Mood};
