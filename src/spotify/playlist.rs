use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::{AoideError, Result, error_for_response},
    info,
    provider::PlaylistProvider,
    spotify::auth::AuthClient,
    types::{Playlist, PlaylistMeta, PlaylistTracksPage},
    utils,
};

/// Maximum page size the platform accepts for playlist track listings.
const TRACKS_PAGE_LIMIT: u32 = 100;

/// Client for playlist retrieval against the Spotify Web API.
///
/// Resolves a playlist reference (raw ID or share link) to an ID, fetches
/// the playlist metadata, and pages through the track listing in platform
/// order. Every request carries a bearer token obtained from the owned
/// [`AuthClient`]; requests are strictly sequential.
pub struct SpotifyClient {
    http: Client,
    api_base_url: String,
    auth: AuthClient,
    debug: bool,
}

impl SpotifyClient {
    /// Builds a playlist client (and its auth client) from the
    /// application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| AoideError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(SpotifyClient {
            http,
            api_base_url: config.api_base_url.clone(),
            auth: AuthClient::new(config)?,
            debug: config.debug,
        })
    }

    /// Imports a playlist by raw ID or share link.
    ///
    /// Issues one request for the playlist name and then one request per
    /// page of tracks, concatenating pages in order until the
    /// platform-reported total is reached.
    ///
    /// # Errors
    ///
    /// - [`AoideError::InvalidIdentifier`] if no ID can be extracted from
    ///   the reference
    /// - [`AoideError::NotFound`] if the platform reports no such playlist
    /// - [`AoideError::RateLimited`], [`AoideError::Api`],
    ///   [`AoideError::Timeout`] per the shared HTTP error mapping
    pub async fn get_playlist(&mut self, reference: &str) -> Result<Playlist> {
        let id = utils::extract_entity_id(reference)?;
        let name = self.get_playlist_name(&id).await?;

        let mut pages: Vec<PlaylistTracksPage> = Vec::new();
        let mut offset: u32 = 0;
        loop {
            let page = self.get_tracks_page(&id, offset).await?;
            offset += page.items.len() as u32;
            let done = page.items.is_empty() || offset >= page.total;
            pages.push(page);
            if done {
                break;
            }
        }

        Ok(Playlist::from_pages(id, name, pages))
    }

    async fn get_playlist_name(&mut self, id: &str) -> Result<String> {
        let api_url = format!(
            "{uri}/playlists/{id}?fields=name",
            uri = &self.api_base_url,
            id = id
        );
        let context = format!("playlist {id}");

        let token = self.auth.bearer_token().await?;
        if self.debug {
            info!("GET {}", api_url);
        }

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AoideError::transport(e, &context))?;

        if !response.status().is_success() {
            return Err(error_for_response(response, &context).await);
        }

        let meta = response
            .json::<PlaylistMeta>()
            .await
            .map_err(|e| AoideError::Api(format!("{context}: malformed response: {e}")))?;

        Ok(meta.name)
    }

    async fn get_tracks_page(&mut self, id: &str, offset: u32) -> Result<PlaylistTracksPage> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?offset={offset}&limit={limit}",
            uri = &self.api_base_url,
            id = id,
            offset = offset,
            limit = TRACKS_PAGE_LIMIT
        );
        let context = format!("tracks of playlist {id} (offset {offset})");

        let token = self.auth.bearer_token().await?;
        if self.debug {
            info!("GET {}", api_url);
        }

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AoideError::transport(e, &context))?;

        if !response.status().is_success() {
            return Err(error_for_response(response, &context).await);
        }

        response
            .json::<PlaylistTracksPage>()
            .await
            .map_err(|e| AoideError::Api(format!("{context}: malformed response: {e}")))
    }
}

#[async_trait]
impl PlaylistProvider for SpotifyClient {
    async fn fetch_playlist(&mut self, reference: &str) -> Result<Playlist> {
        self.get_playlist(reference).await
    }
}
