//! Trait seams between the command loop and the API clients.
//!
//! The command loop is generic over these traits so it can be driven by
//! the real HTTP clients in production and by stub implementations in
//! tests, without touching the network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AudioFeatures, Playlist};

/// Resolves a playlist reference (raw ID or share link) to a fully
/// populated playlist.
#[async_trait]
pub trait PlaylistProvider {
    async fn fetch_playlist(&mut self, reference: &str) -> Result<Playlist>;
}

/// Fetches the audio-analysis feature vector for a single track.
#[async_trait]
pub trait FeatureProvider {
    async fn fetch_features(&mut self, track_id: &str) -> Result<AudioFeatures>;
}
