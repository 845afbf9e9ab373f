//! Integration tests for the resolver.
//!
//! These tests run the classifier and the resolver together against an
//! in-memory search capability, covering the classify-then-resolve flow
//! end to end.

use async_trait::async_trait;
use classifier::{Mood, MoodClassifier};
use resolver::{
    MAX_RECOMMENDATIONS, PlaylistItem, PlaylistSearch, RecommendationResolver, SearchError,
    queries_for,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// Search capability that serves a fixed number of playlists per query and
/// records the queries and markets it was called with.
struct RecordingSearch {
    per_query: usize,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSearch {
    fn new(per_query: usize) -> Self {
        Self {
            per_query,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistSearch for RecordingSearch {
    async fn search_playlists(
        &self,
        query: &str,
        _limit: u8,
        market: &str,
    ) -> Result<Vec<PlaylistItem>, SearchError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), market.to_string()));

        Ok((0..self.per_query)
            .map(|i| PlaylistItem {
                id: format!("{}-{}", query.replace(' ', "-"), i),
                name: format!("{} #{}", query, i),
                url: Some(format!("https://example.com/{}/{}", query, i)),
                image: Some("https://example.com/cover.jpg".to_string()),
                description: Some("test playlist".to_string()),
            })
            .collect())
    }
}

#[tokio::test]
async fn test_sad_entry_resolves_sad_templates_in_order() {
    let classifier = MoodClassifier::new();
    let result = classifier.classify("I can't stop crying, feeling so lonely and tired");
    assert_eq!(result.mood, Mood::Sad);

    let search = RecordingSearch::new(2);
    let resolver = RecommendationResolver::new();
    let playlists = resolver.resolve(result.mood, &search).await;

    // queries issued sequentially in template order
    let queries: Vec<String> = search.calls().into_iter().map(|(q, _)| q).collect();
    assert_eq!(queries, queries_for(Mood::Sad));

    // 3 queries x 2 distinct playlists each
    assert_eq!(playlists.len(), 6);
}

#[tokio::test]
async fn test_resolution_never_exceeds_cap() {
    let search = RecordingSearch::new(5);
    let resolver = RecommendationResolver::new();

    for mood in Mood::ALL {
        let playlists = resolver.resolve(mood, &search).await;
        assert!(playlists.len() <= MAX_RECOMMENDATIONS);

        let ids: HashSet<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), playlists.len(), "duplicate ids for {}", mood);
    }
}

#[tokio::test]
async fn test_market_is_forwarded_to_every_query() {
    let search = RecordingSearch::new(1);
    let resolver = RecommendationResolver::new().with_market("SE");

    resolver.resolve(Mood::Calm, &search).await;

    for (_, market) in search.calls() {
        assert_eq!(market, "SE");
    }
}

#[tokio::test]
async fn test_happy_entry_uses_happy_templates() {
    let classifier = MoodClassifier::new();
    let result = classifier.classify("What a wonderful, amazing day!");
    assert_eq!(result.mood, Mood::Happy);

    let search = RecordingSearch::new(1);
    let resolver = RecommendationResolver::new();
    resolver.resolve(result.mood, &search).await;

    let queries: Vec<String> = search.calls().into_iter().map(|(q, _)| q).collect();
    assert_eq!(queries, queries_for(Mood::Happy));
}
