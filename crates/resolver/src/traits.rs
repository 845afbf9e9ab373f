//! The search-capability seam consumed by the resolver.
//!
//! The resolver never talks to a provider directly; it goes through the
//! [`PlaylistSearch`] trait so the HTTP client stays swappable and tests
//! can run against an in-memory implementation.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A single playlist result from one search query.
///
/// `id` is the provider's identifier, used purely as the dedup key; it is
/// skipped during serialization and never exposed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistItem {
    #[serde(skip_serializing)]
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Errors a search capability can report for one query.
///
/// The resolver treats any of these as "no results for this query" and
/// moves on; they only surface in logs.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a usable response
    #[error("Search transport failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("Search returned status {status} for query {query:?}")]
    Status { status: u16, query: String },
}

/// An external playlist-search capability.
///
/// ## Design Note
/// - `Send + Sync` so one capability can back concurrent invocations
/// - Queries carry their own limit and market so the capability stays
///   stateless with respect to resolver configuration
#[async_trait]
pub trait PlaylistSearch: Send + Sync {
    /// Run one search query, returning up to `limit` playlists for the
    /// given market.
    async fn search_playlists(
        &self,
        query: &str,
        limit: u8,
        market: &str,
    ) -> Result<Vec<PlaylistItem>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_without_id() {
        let item = PlaylistItem {
            id: "37i9dQZF1DX3rxVfibe1L0".to_string(),
            name: "Mood Booster".to_string(),
            url: Some("https://open.spotify.com/playlist/37i9dQZF1DX3rxVfibe1L0".to_string()),
            image: None,
            description: Some("Get happy".to_string()),
        };

        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.get("id").is_none());
        assert_eq!(object.len(), 4);
        assert_eq!(object["name"], "Mood Booster");
        assert!(object["image"].is_null());
    }
}
