//! # Mood Orchestrator
//!
//! This module coordinates the whole invocation:
//! 1. Take a decoded journal entry
//! 2. Classify its mood (infallible)
//! 3. Resolve playlist recommendations for that mood, if a search
//!    capability is attached
//! 4. Emit the output payload
//!
//! Classification must always reach the payload: any failure on the
//! recommendation side degrades to an empty list, never to a missing
//! payload.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use classifier::{KeywordCounts, Mood, MoodClassifier};
use journal::JournalEntry;
use resolver::{PlaylistItem, PlaylistSearch, RecommendationResolver};

/// The single externally observable artifact of one invocation.
///
/// Field names, the key set and the ordering of recommendations are a
/// compatibility contract with downstream consumers.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationPayload {
    pub input_blob: String,
    pub mood: Mood,
    pub sentiment_compound: f64,
    pub keyword_counts: KeywordCounts,
    pub generated_at_utc: String,
    pub recommendations: Vec<PlaylistItem>,
}

/// Runs journal entries through classification and recommendation
/// resolution.
#[derive(Clone)]
pub struct MoodOrchestrator {
    classifier: MoodClassifier,
    resolver: RecommendationResolver,
    search: Option<Arc<dyn PlaylistSearch>>,
}

impl MoodOrchestrator {
    /// Create an orchestrator without a search capability.
    ///
    /// Entries still classify; payloads carry empty recommendations.
    pub fn new() -> Self {
        Self {
            classifier: MoodClassifier::new(),
            resolver: RecommendationResolver::new(),
            search: None,
        }
    }

    /// Attach a search capability (builder pattern).
    pub fn with_search(mut self, search: Arc<dyn PlaylistSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// Replace the default resolver configuration.
    pub fn with_resolver(mut self, resolver: RecommendationResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the default classifier.
    pub fn with_classifier(mut self, classifier: MoodClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Process one journal entry into its output payload.
    ///
    /// Never fails: degraded connectivity only ever shows up as an empty
    /// or short recommendations array.
    pub async fn process(&self, entry: &JournalEntry) -> RecommendationPayload {
        info!("Processing journal entry {} ({} bytes)", entry.name, entry.byte_len);

        let classification = self.classifier.classify(&entry.text);
        info!(
            "Classified {} as {} (compound: {:.3})",
            entry.name, classification.mood, classification.compound
        );

        let recommendations = self.resolve_recommendations(classification.mood).await;
        info!(
            "Resolved {} recommendations for {}",
            recommendations.len(),
            entry.name
        );

        RecommendationPayload {
            input_blob: entry.name.clone(),
            mood: classification.mood,
            sentiment_compound: classification.compound,
            keyword_counts: classification.keyword_counts,
            generated_at_utc: utc_timestamp(),
            recommendations,
        }
    }

    async fn resolve_recommendations(&self, mood: Mood) -> Vec<PlaylistItem> {
        match &self.search {
            Some(search) => self.resolver.resolve(mood, search.as_ref()).await,
            None => {
                warn!("No search capability attached, emitting empty recommendations");
                Vec::new()
            }
        }
    }
}

impl Default for MoodOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time at second precision, e.g. `2024-03-01T18:04:05Z`.
fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
