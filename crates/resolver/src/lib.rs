//! Resolver for turning a classified mood into playlist recommendations.
//!
//! This crate provides:
//! - The [`PlaylistSearch`] trait, the seam to the external search provider
//! - The mood-to-query template table (total via the happy fallback)
//! - [`RecommendationResolver`], which fans queries out sequentially,
//!   deduplicates results by provider id and caps the output
//!
//! ## Architecture
//! The resolver sits between the classifier and the search provider:
//! 1. A mood selects an ordered list of query templates
//! 2. Each query runs through the capability; failures are skipped
//! 3. Results merge in first-seen order, deduplicated, capped at 10
//!
//! ## Example Usage
//! ```ignore
//! use classifier::Mood;
//! use resolver::RecommendationResolver;
//!
//! let resolver = RecommendationResolver::new().with_market("US");
//! let playlists = resolver.resolve(Mood::Calm, &search).await;
//! ```

pub mod queries;
pub mod resolver;
pub mod traits;

// Re-export main types
pub use queries::{MOOD_QUERIES, queries_for};
pub use resolver::{MAX_RECOMMENDATIONS, RecommendationResolver};
pub use traits::{PlaylistItem, PlaylistSearch, SearchError};
