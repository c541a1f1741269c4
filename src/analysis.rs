//! Track-analysis API client.
//!
//! Independent of the platform Web API: the analysis service authenticates
//! with its own API key (`x-rapidapi-key`/`x-rapidapi-host` headers) and
//! serves one feature vector per track ID. One request per track, no
//! batching, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::{AoideError, Result, error_for_response},
    info,
    provider::FeatureProvider,
    types::{AnalysisResponse, AudioFeatures},
};

/// Client for the RapidAPI track-analysis service.
pub struct AnalysisClient {
    http: Client,
    key: Option<String>,
    host: String,
    debug: bool,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| AoideError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(AnalysisClient {
            http,
            key: config.analysis_key.clone(),
            host: config.analysis_host.clone(),
            debug: config.debug,
        })
    }

    /// Fetches the audio-feature vector for a single track.
    ///
    /// # Errors
    ///
    /// Returns [`AoideError::Auth`] when `AUDIOANALYSIS_KEY` is not
    /// configured, otherwise the shared HTTP error mapping applies. A
    /// failure here only affects the one track being queried; bulk
    /// callers collect failures and keep going.
    pub async fn get_features(&self, track_id: &str) -> Result<AudioFeatures> {
        let key = self
            .key
            .as_deref()
            .ok_or_else(|| AoideError::Auth("AUDIOANALYSIS_KEY is not set".to_string()))?;

        let api_url = format!(
            "https://{host}/pktx/spotify/{id}",
            host = &self.host,
            id = track_id
        );
        let context = format!("analysis of track {track_id}");

        if self.debug {
            info!("GET {}", api_url);
        }

        let response = self
            .http
            .get(&api_url)
            .header("x-rapidapi-key", key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
            .map_err(|e| AoideError::transport(e, &context))?;

        if !response.status().is_success() {
            return Err(error_for_response(response, &context).await);
        }

        let features = response
            .json::<AnalysisResponse>()
            .await
            .map_err(|e| AoideError::Api(format!("{context}: malformed response: {e}")))?;

        Ok(features.into())
    }
}

#[async_trait]
impl FeatureProvider for AnalysisClient {
    async fn fetch_features(&mut self, track_id: &str) -> Result<AudioFeatures> {
        self.get_features(track_id).await
    }
}
