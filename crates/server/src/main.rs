//! Simple test harness for the mood orchestrator.
//!
//! This binary runs a single journal entry through the end-to-end
//! pipeline: decode, classify, resolve recommendations, print the payload.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use journal::JournalEntry;
use server::MoodOrchestrator;
use spotify_client::{SpotifyClient, SpotifyCredentials};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,resolver=debug,classifier=debug")
        .init();

    info!("Starting mood pipeline test harness");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/journal.txt"));

    let entry = JournalEntry::load(&path).context("Failed to load journal entry")?;

    // Recommendation resolution degrades gracefully without credentials
    let mut orchestrator = MoodOrchestrator::new();
    match SpotifyCredentials::from_env() {
        Ok(credentials) => match SpotifyClient::connect(&credentials).await {
            Ok(client) => {
                info!("Connected to Spotify");
                orchestrator = orchestrator.with_search(Arc::new(client));
            }
            Err(err) => warn!("Spotify unavailable, continuing without recommendations: {}", err),
        },
        Err(err) => warn!("{}; continuing without recommendations", err),
    }

    let payload = orchestrator.process(&entry).await;

    info!("Mood: {} (compound: {:.3})", payload.mood, payload.sentiment_compound);
    info!("Recommendations: {}", payload.recommendations.len());
    for (i, playlist) in payload.recommendations.iter().enumerate() {
        info!(
            "{}. {} [{}]",
            i + 1,
            playlist.name,
            playlist.url.as_deref().unwrap_or("no url")
        );
    }

    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
