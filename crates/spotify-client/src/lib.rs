//! Spotify search client backing the recommendation resolver.
//!
//! This crate provides the concrete [`PlaylistSearch`] implementation for
//! the Spotify Web API. It handles:
//! - Credential acquisition from the environment
//! - The client-credentials token exchange
//! - Playlist search with market and limit restrictions
//! - Mapping wire responses into resolver [`PlaylistItem`]s

use async_trait::async_trait;
use resolver::{PlaylistItem, PlaylistSearch, SearchError};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Fixed per-call network timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Errors that can occur while setting up the Spotify client.
///
/// These are fatal to recommendation resolution: without a token no query
/// can succeed. Per-query failures are reported as [`SearchError`] instead
/// and are recoverable.
#[derive(Error, Debug)]
pub enum SpotifyClientError {
    #[error("Missing Spotify credential: set {0}")]
    MissingCredential(&'static str),

    #[error("Failed to reach Spotify: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange rejected with status {status}")]
    TokenRejected { status: u16 },
}

/// Client-credentials pair for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    client_id: String,
    client_secret: String,
}

impl SpotifyCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, SpotifyClientError> {
        let client_id = env::var(CLIENT_ID_VAR)
            .map_err(|_| SpotifyClientError::MissingCredential(CLIENT_ID_VAR))?;
        let client_secret = env::var(CLIENT_SECRET_VAR)
            .map_err(|_| SpotifyClientError::MissingCredential(CLIENT_SECRET_VAR))?;
        Ok(Self::new(client_id, client_secret))
    }
}

// ---------------------------------------------------------------------------
// Wire models
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    playlists: Option<PlaylistPage>,
}

#[derive(Deserialize)]
struct PlaylistPage {
    // Spotify is known to include null entries in this list
    #[serde(default)]
    items: Vec<Option<PlaylistObject>>,
}

#[derive(Deserialize)]
struct PlaylistObject {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    external_urls: Option<ExternalUrls>,
    #[serde(default)]
    images: Vec<ImageObject>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct ImageObject {
    url: Option<String>,
}

impl From<PlaylistObject> for PlaylistItem {
    fn from(playlist: PlaylistObject) -> Self {
        PlaylistItem {
            id: playlist.id,
            name: playlist.name.unwrap_or_default(),
            url: playlist.external_urls.and_then(|urls| urls.spotify),
            image: playlist
                .images
                .into_iter()
                .next()
                .and_then(|image| image.url),
            description: playlist.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated Spotify search client.
///
/// Connecting performs the token exchange up front, so a constructed
/// client is always ready to query.
pub struct SpotifyClient {
    http: reqwest::Client,
    token: String,
}

impl SpotifyClient {
    /// Exchange credentials for an access token and build the client.
    ///
    /// Any failure here is fatal to the whole resolution; the caller
    /// decides whether to degrade to an empty recommendation list.
    pub async fn connect(credentials: &SpotifyCredentials) -> Result<Self, SpotifyClientError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        let response = http
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpotifyClientError::TokenRejected {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse = response.json().await?;
        info!("Acquired Spotify client-credentials token");

        Ok(Self {
            http,
            token: body.access_token,
        })
    }
}

#[async_trait]
impl PlaylistSearch for SpotifyClient {
    async fn search_playlists(
        &self,
        query: &str,
        limit: u8,
        market: &str,
    ) -> Result<Vec<PlaylistItem>, SearchError> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(SEARCH_URL)
            .bearer_auth(&self.token)
            .query(&[
                ("q", query),
                ("type", "playlist"),
                ("limit", limit.as_str()),
                ("market", market),
            ])
            .send()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                query: query.to_string(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let items: Vec<PlaylistItem> = body
            .playlists
            .map(|page| page.items.into_iter().flatten().map(Into::into).collect())
            .unwrap_or_default();

        debug!("Query {:?} returned {} playlists", query, items.len());
        Ok(items)
    }
}
