//! The recommendation resolver: query fan-out, dedup and capping.

use crate::queries::queries_for;
use crate::traits::{PlaylistItem, PlaylistSearch};
use classifier::Mood;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Maximum number of recommendations in one resolution.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Playlists requested from the provider per query.
const PER_QUERY_LIMIT: u8 = 5;

/// Default market restriction for search queries.
const DEFAULT_MARKET: &str = "IN";

/// Resolves a mood into a deduplicated, capped list of playlists.
///
/// ## Algorithm
/// 1. Look up the mood's query templates (happy fallback)
/// 2. Issue each query sequentially, in template order
/// 3. Skip queries that fail; partial failure only reduces recall
/// 4. Keep the first occurrence of each playlist id across queries
/// 5. Truncate to [`MAX_RECOMMENDATIONS`]
#[derive(Debug, Clone)]
pub struct RecommendationResolver {
    market: String,
    per_query_limit: u8,
    max_results: usize,
}

impl RecommendationResolver {
    pub fn new() -> Self {
        Self {
            market: DEFAULT_MARKET.to_string(),
            per_query_limit: PER_QUERY_LIMIT,
            max_results: MAX_RECOMMENDATIONS,
        }
    }

    /// Configure the market restriction (default: "IN")
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Configure the per-query result limit (default: 5)
    pub fn with_per_query_limit(mut self, limit: u8) -> Self {
        self.per_query_limit = limit;
        self
    }

    /// Resolve recommendations for a mood through the given capability.
    ///
    /// Never fails: every per-query error is swallowed after logging, and
    /// an empty list is a valid outcome.
    pub async fn resolve(&self, mood: Mood, search: &dyn PlaylistSearch) -> Vec<PlaylistItem> {
        let queries = queries_for(mood);
        let mut seen: HashSet<String> = HashSet::new();
        let mut playlists: Vec<PlaylistItem> = Vec::new();

        for &query in queries {
            debug!("Searching playlists for {} with query {:?}", mood, query);

            let items = match search
                .search_playlists(query, self.per_query_limit, &self.market)
                .await
            {
                Ok(items) => items,
                Err(err) => {
                    warn!("Playlist search failed for query {:?}: {}", query, err);
                    continue;
                }
            };

            for item in items {
                // Cross-query dedup: first occurrence wins
                if seen.insert(item.id.clone()) {
                    playlists.push(item);
                }
            }
        }

        playlists.truncate(self.max_results);
        debug!(
            "Resolved {} unique playlists for {}",
            playlists.len(),
            mood
        );
        playlists
    }
}

impl Default for RecommendationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SearchError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    fn item(id: &str) -> PlaylistItem {
        PlaylistItem {
            id: id.to_string(),
            name: format!("Playlist {}", id),
            url: Some(format!("https://open.spotify.com/playlist/{}", id)),
            image: None,
            description: None,
        }
    }

    /// In-memory search capability with a canned response per query.
    struct FakeSearch {
        responses: HashMap<String, Vec<PlaylistItem>>,
    }

    impl FakeSearch {
        fn new(responses: Vec<(&str, Vec<PlaylistItem>)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(q, items)| (q.to_string(), items))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PlaylistSearch for FakeSearch {
        async fn search_playlists(
            &self,
            query: &str,
            _limit: u8,
            _market: &str,
        ) -> Result<Vec<PlaylistItem>, SearchError> {
            self.responses
                .get(query)
                .cloned()
                .ok_or_else(|| SearchError::Status {
                    status: 502,
                    query: query.to_string(),
                })
        }
    }

    /// Capability that fails every query.
    struct AlwaysFails;

    #[async_trait]
    impl PlaylistSearch for AlwaysFails {
        async fn search_playlists(
            &self,
            query: &str,
            _limit: u8,
            _market: &str,
        ) -> Result<Vec<PlaylistItem>, SearchError> {
            Err(SearchError::Status {
                status: 500,
                query: query.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_deduplicates_across_queries() {
        let search = FakeSearch::new(vec![
            ("sad songs", vec![item("a"), item("b")]),
            ("rainy day", vec![item("b"), item("c")]),
            ("lofi sad", vec![item("a"), item("d")]),
        ]);

        let resolver = RecommendationResolver::new();
        let playlists = resolver.resolve(Mood::Sad, &search).await;

        let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_preserves_first_seen_order() {
        let search = FakeSearch::new(vec![
            ("sad songs", vec![item("z"), item("a")]),
            ("rainy day", vec![item("m")]),
            ("lofi sad", vec![]),
        ]);

        let resolver = RecommendationResolver::new();
        let playlists = resolver.resolve(Mood::Sad, &search).await;

        let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_caps_at_maximum() {
        let many: Vec<PlaylistItem> = (0..5).map(|i| item(&format!("q1-{}", i))).collect();
        let more: Vec<PlaylistItem> = (0..5).map(|i| item(&format!("q2-{}", i))).collect();
        let extra: Vec<PlaylistItem> = (0..5).map(|i| item(&format!("q3-{}", i))).collect();

        let search = FakeSearch::new(vec![
            ("sad songs", many),
            ("rainy day", more),
            ("lofi sad", extra),
        ]);

        let resolver = RecommendationResolver::new();
        let playlists = resolver.resolve(Mood::Sad, &search).await;

        assert_eq!(playlists.len(), MAX_RECOMMENDATIONS);
        // the cap keeps the earliest results
        assert_eq!(playlists[0].id, "q1-0");
        assert_eq!(playlists[9].id, "q2-4");
    }

    #[tokio::test]
    async fn test_failed_query_is_skipped() {
        // "rainy day" has no canned response and errors out
        let search = FakeSearch::new(vec![
            ("sad songs", vec![item("a")]),
            ("lofi sad", vec![item("b")]),
        ]);

        let resolver = RecommendationResolver::new();
        let playlists = resolver.resolve(Mood::Sad, &search).await;

        let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_all_queries_failing_yields_empty_list() {
        let resolver = RecommendationResolver::new();
        let playlists = resolver.resolve(Mood::Angry, &AlwaysFails).await;
        assert!(playlists.is_empty());
    }
}
